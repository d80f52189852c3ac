//! x86_64 SIMD helpers: 16-byte loads for TE and the 4×32-bit lane machinery
//! shared by the SU and SA families.
//!
//! # Safety
//!
//! Every `unsafe fn` here carries `#[target_feature]` for a subset of SSSE3,
//! SSE4.1 and SSE4.2. Callers must have verified those features (the family
//! gate does).
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::indexing_slicing)] // 16-byte windows at offsets derived from the length bucket

use core::arch::x86_64::*;

use crate::{
  family::mk,
  mix::{C1, C2, mur},
  util::{fetch32, rotr32},
};

/// Default seed of the unseeded 32-bit SIMD schedules.
pub(super) const SEED: u32 = 81;

/// Unaligned 16-byte load at `offset`; panics if the window leaves `s`.
#[inline(always)]
pub(super) fn fetch128(s: &[u8], offset: usize) -> __m128i {
  let window = &s[offset..offset + 16];
  // SAFETY: `window` is exactly 16 readable bytes and `loadu` has no alignment requirement.
  // SSE2 is part of the x86_64 baseline.
  unsafe { _mm_loadu_si128(window.as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "sse4.2")]
pub(super) unsafe fn crc32(crc: u32, v: u32) -> u32 {
  _mm_crc32_u32(crc, v)
}

#[inline(always)]
pub(super) fn splat(x: u32) -> __m128i {
  // SAFETY: SSE2 is part of the x86_64 baseline.
  unsafe { _mm_set1_epi32(x as i32) }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lane arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn add(x: __m128i, y: __m128i) -> __m128i {
  _mm_add_epi32(x, y)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn xor(x: __m128i, y: __m128i) -> __m128i {
  _mm_xor_si128(x, y)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn mul(x: __m128i, y: __m128i) -> __m128i {
  _mm_mullo_epi32(x, y)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
unsafe fn mul5(x: __m128i) -> __m128i {
  add(x, _mm_slli_epi32::<2>(x))
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn rol17(x: __m128i) -> __m128i {
  _mm_or_si128(_mm_slli_epi32::<17>(x), _mm_srli_epi32::<15>(x))
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
unsafe fn rol19(x: __m128i) -> __m128i {
  _mm_or_si128(_mm_slli_epi32::<19>(x), _mm_srli_epi32::<13>(x))
}

/// Rotate the four lanes down by one: `[a, b, c, d] -> [b, c, d, a]`.
#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn shuffle0321(x: __m128i) -> __m128i {
  _mm_shuffle_epi32::<0x39>(x)
}

/// Permute the bytes of `x` by the low nibbles of `ctl`.
#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn shuf(x: __m128i, ctl: __m128i) -> __m128i {
  _mm_shuffle_epi8(x, ctl)
}

// ─────────────────────────────────────────────────────────────────────────────
// Lane state
// ─────────────────────────────────────────────────────────────────────────────

/// The four accumulator vectors plus the broadcast multipliers.
#[derive(Clone, Copy)]
pub(super) struct Lanes {
  pub(super) h: __m128i,
  pub(super) g: __m128i,
  pub(super) f: __m128i,
  pub(super) k: __m128i,
  cc1: __m128i,
  cc2: __m128i,
}

impl Lanes {
  #[inline(always)]
  pub(super) fn new() -> Self {
    let g = splat(C1.wrapping_mul(SEED));
    Self {
      h: splat(SEED),
      g,
      f: g,
      k: splat(0xe654_6b64),
      cc1: splat(C1),
      cc2: splat(C2),
    }
  }

  #[inline]
  #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
  pub(super) unsafe fn mulc1(&self, x: __m128i) -> __m128i {
    mul(x, self.cc1)
  }

  #[inline]
  #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
  pub(super) unsafe fn mulc2(&self, x: __m128i) -> __m128i {
    mul(x, self.cc2)
  }

  /// Lane-wise [`mur`] of `a` into `h`, offset by `k`.
  #[inline]
  #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
  pub(super) unsafe fn murk(&self, a: __m128i, h: __m128i) -> __m128i {
    add(self.k, mul5(rol19(xor(self.mulc2(rol17(self.mulc1(a))), h))))
  }

  /// Single-block schedule for 40..=79 bytes. Returns `g` before its lane
  /// rotation, which SU keeps as its extra lane.
  #[inline]
  #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
  pub(super) unsafe fn block_40to79(&mut self, s: &[u8]) -> __m128i {
    let len = s.len();
    let a = fetch128(s, 0);
    let b = fetch128(s, 16);
    let c = fetch128(s, (len - 15) / 2);
    let d = fetch128(s, len - 32);
    let e = fetch128(s, len - 16);
    self.h = add(self.h, a);
    self.g = add(self.g, b);
    let q = self.g;
    self.g = shuffle0321(self.g);
    self.f = add(self.f, c);
    let be = add(b, self.mulc1(e));
    self.h = add(self.h, self.f);
    self.f = add(self.f, self.h);
    self.h = add(self.murk(d, self.h), e);
    self.k = xor(self.k, shuf(self.g, self.f));
    self.g = add(xor(c, self.g), a);
    self.f = add(xor(be, self.f), d);
    self.k = add(self.k, be);
    self.k = add(self.k, shuf(self.f, self.h));
    self.f = add(self.f, self.g);
    self.g = add(self.g, self.f);
    self.g = add(splat(len as u32), self.mulc1(self.g));
    q
  }

  /// Final mix and CRC fold. `q` is XORed into `k` and `h`; pass zero for no extra lane.
  #[inline]
  #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
  pub(super) unsafe fn finish(mut self, q: __m128i) -> u32 {
    self.g = shuffle0321(self.g);
    self.k = xor(self.k, self.g);
    self.k = xor(self.k, q);
    self.h = xor(self.h, q);
    self.f = self.mulc1(self.f);
    self.k = self.mulc2(self.k);
    self.g = self.mulc1(self.g);
    self.h = self.mulc2(self.h);
    self.k = add(self.k, shuf(self.g, self.f));
    self.h = add(self.h, self.f);
    self.f = add(self.f, self.h);
    self.g = add(self.g, self.k);
    self.k = add(self.k, self.g);
    self.k = xor(self.k, shuf(self.f, self.h));

    let mut buf = [0u8; 64];
    for (chunk, v) in buf.chunks_exact_mut(16).zip([self.f, self.g, self.k, self.h]) {
      _mm_storeu_si128(chunk.as_mut_ptr().cast(), v);
    }
    let w = |i: usize| fetch32(&buf, i * 4);
    let mut x = w(0);
    let mut y = w(1);
    let mut z = w(2);
    x = crc32(x, w(3));
    y = crc32(y, w(4));
    z = crc32(z.wrapping_mul(C1), w(5));
    x = crc32(x, w(6));
    y = crc32(y.wrapping_mul(C1), w(7));
    let o = y;
    z = crc32(z, w(8));
    x = crc32(x.wrapping_mul(C1), w(9));
    y = crc32(y, w(10));
    z = crc32(z.wrapping_mul(C1), w(11));
    x = crc32(x, w(12));
    y = crc32(y.wrapping_mul(C1), w(13));
    z = crc32(z, w(14));
    x = crc32(x, w(15));
    o.wrapping_sub(x).wrapping_add(y).wrapping_sub(z).wrapping_mul(C1)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar paths
// ─────────────────────────────────────────────────────────────────────────────

/// 25..=39 bytes. `HW_INNER` selects a CRC32-C inner fold (SU) over a software `mur` (SA).
#[inline]
#[target_feature(enable = "sse4.2")]
pub(super) unsafe fn hash32_len_25to39<const HW_INNER: bool>(s: &[u8]) -> u32 {
  let len = s.len();
  let mut a = len as u32;
  let mut b = SEED.wrapping_mul(C2);
  let c = a.wrapping_add(b).wrapping_add(fetch32(s, len - 16));
  a = a.wrapping_add(fetch32(s, len - 4));
  b = b.wrapping_add(fetch32(s, len - 20));
  let mut d = a;
  a = rotr32(a, 21);
  let inner = if HW_INNER { crc32(c, d) } else { mur(c, d) };
  a = mur(a, mur(b, inner));
  a = a.wrapping_add(fetch32(s, len - 12));
  b = b.wrapping_add(fetch32(s, len - 8));
  d = d.wrapping_add(a);
  a = a.wrapping_add(d);
  b = mur(b, d).wrapping_mul(C2);
  a = crc32(a, b.wrapping_add(c));
  mk::hash32_len_13to24(&s[..(len + 1) / 2], a).wrapping_add(b)
}
