//! TE super-block kernel (SSSE3 `pshufb` + SSE4.1 `pmulld`).
//!
//! # Safety
//!
//! Callers must ensure SSSE3 and SSE4.1 are available.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::{arch::x86_64::*, mem::swap};

use crate::{
  family::{sse::fetch128, xo},
  util::rotr64,
};

// Helpers for 2×64 / 4×32 lane operations.

#[inline]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn add(x: __m128i, y: __m128i) -> __m128i {
  _mm_add_epi64(x, y)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn xor(x: __m128i, y: __m128i) -> __m128i {
  _mm_xor_si128(x, y)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn mul(x: __m128i, y: __m128i) -> __m128i {
  _mm_mullo_epi32(x, y)
}

/// Permute the bytes of `y` by the control vector `x`.
#[inline]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn shuf(x: __m128i, y: __m128i) -> __m128i {
  _mm_shuffle_epi8(y, x)
}

#[inline]
#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn fold(k_mult: __m128i, k_shuf: __m128i, v: __m128i) -> __m128i {
  mul(k_mult, shuf(k_shuf, mul(k_mult, v)))
}

/// Hash `s` (at least 256 bytes) with two seeds.
#[target_feature(enable = "ssse3,sse4.1")]
pub(super) unsafe fn hash64_long(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  let n = s.len();
  debug_assert!(n >= 256);
  let k_shuf = _mm_set_epi8(4, 11, 10, 5, 8, 15, 6, 9, 12, 2, 14, 13, 0, 7, 3, 1);
  let k_mult = _mm_set_epi32(
    0xbdd6_3339_u32 as i32,
    0x4554_fa03_u32 as i32,
    0x343e_33ed_u32 as i32,
    0xcc9e_2d51_u32 as i32,
  );
  let seed2 = seed0.wrapping_add(113).wrapping_mul(seed1.wrapping_add(9));
  let seed3 = rotr64(seed0, 23)
    .wrapping_add(27)
    .wrapping_mul(rotr64(seed1, 30).wrapping_add(111));
  let mut d0 = _mm_cvtsi64_si128(seed0 as i64);
  let mut d1 = _mm_cvtsi64_si128(seed1 as i64);
  let mut d2 = shuf(k_shuf, d0);
  let mut d3 = shuf(k_shuf, d1);
  let mut d4 = xor(d0, d1);
  let mut d5 = xor(d1, d2);
  let mut d6 = xor(d2, d4);
  let mut d7 = _mm_set1_epi32((seed2 >> 32) as i32);
  let mut d8 = mul(k_mult, d2);
  let mut d9 = _mm_set1_epi32((seed3 >> 32) as i32);
  let mut d10 = _mm_set1_epi32(seed3 as i32);
  let mut d11 = add(d2, _mm_set1_epi32(seed2 as i32));

  let end = n & !255;
  let mut pos = 0;
  loop {
    let mut z = fetch128(s, pos);
    d0 = add(d0, z);
    d1 = shuf(k_shuf, d1);
    d2 = xor(d2, d0);
    d4 = xor(d4, z);
    d4 = xor(d4, d1);
    swap(&mut d0, &mut d6);
    z = fetch128(s, pos + 16);
    d5 = add(d5, z);
    d6 = shuf(k_shuf, d6);
    d8 = shuf(k_shuf, d8);
    d7 = xor(d7, d5);
    d0 = xor(d0, z);
    d0 = xor(d0, d6);
    swap(&mut d5, &mut d11);
    z = fetch128(s, pos + 32);
    d1 = add(d1, z);
    d2 = shuf(k_shuf, d2);
    d4 = shuf(k_shuf, d4);
    d5 = xor(d5, z);
    d5 = xor(d5, d2);
    swap(&mut d10, &mut d4);
    z = fetch128(s, pos + 48);
    d6 = add(d6, z);
    d7 = shuf(k_shuf, d7);
    d0 = shuf(k_shuf, d0);
    d8 = xor(d8, d6);
    d1 = xor(d1, z);
    d1 = add(d1, d7);
    z = fetch128(s, pos + 64);
    d2 = add(d2, z);
    d5 = shuf(k_shuf, d5);
    d4 = add(d4, d2);
    d6 = xor(d6, z);
    d6 = xor(d6, d11);
    swap(&mut d8, &mut d2);
    z = fetch128(s, pos + 80);
    d7 = xor(d7, z);
    d8 = shuf(k_shuf, d8);
    d1 = shuf(k_shuf, d1);
    d0 = add(d0, d7);
    d2 = add(d2, z);
    d2 = add(d2, d8);
    swap(&mut d1, &mut d7);
    z = fetch128(s, pos + 96);
    d4 = shuf(k_shuf, d4);
    d6 = shuf(k_shuf, d6);
    d8 = mul(k_mult, d8);
    d5 = xor(d5, d11);
    d7 = xor(d7, z);
    d7 = add(d7, d4);
    swap(&mut d6, &mut d0);
    z = fetch128(s, pos + 112);
    d8 = add(d8, z);
    d0 = shuf(k_shuf, d0);
    d2 = shuf(k_shuf, d2);
    d1 = xor(d1, d8);
    d10 = xor(d10, z);
    d10 = xor(d10, d0);
    swap(&mut d11, &mut d5);
    z = fetch128(s, pos + 128);
    d4 = add(d4, z);
    d5 = shuf(k_shuf, d5);
    d7 = shuf(k_shuf, d7);
    d6 = add(d6, d4);
    d8 = xor(d8, z);
    d8 = xor(d8, d5);
    swap(&mut d4, &mut d10);
    z = fetch128(s, pos + 144);
    d0 = add(d0, z);
    d1 = shuf(k_shuf, d1);
    d2 = add(d2, d0);
    d4 = xor(d4, z);
    d4 = xor(d4, d1);
    z = fetch128(s, pos + 160);
    d5 = add(d5, z);
    d6 = shuf(k_shuf, d6);
    d8 = shuf(k_shuf, d8);
    d7 = xor(d7, d5);
    d0 = xor(d0, z);
    d0 = xor(d0, d6);
    swap(&mut d2, &mut d8);
    z = fetch128(s, pos + 176);
    d1 = add(d1, z);
    d2 = shuf(k_shuf, d2);
    d4 = shuf(k_shuf, d4);
    d5 = mul(k_mult, d5);
    d5 = xor(d5, z);
    d5 = xor(d5, d2);
    swap(&mut d7, &mut d1);
    z = fetch128(s, pos + 192);
    d6 = add(d6, z);
    d7 = shuf(k_shuf, d7);
    d0 = shuf(k_shuf, d0);
    d8 = add(d8, d6);
    d1 = xor(d1, z);
    d1 = xor(d1, d7);
    swap(&mut d0, &mut d6);
    z = fetch128(s, pos + 208);
    d2 = add(d2, z);
    d5 = shuf(k_shuf, d5);
    d4 = xor(d4, d2);
    d6 = xor(d6, z);
    d6 = xor(d6, d9);
    swap(&mut d5, &mut d11);
    z = fetch128(s, pos + 224);
    d7 = add(d7, z);
    d8 = shuf(k_shuf, d8);
    d1 = shuf(k_shuf, d1);
    d0 = xor(d0, d7);
    d2 = xor(d2, z);
    d2 = xor(d2, d8);
    swap(&mut d10, &mut d4);
    z = fetch128(s, pos + 240);
    d3 = add(d3, z);
    d4 = shuf(k_shuf, d4);
    d6 = shuf(k_shuf, d6);
    d7 = mul(k_mult, d7);
    d5 = add(d5, d3);
    d7 = xor(d7, z);
    d7 = xor(d7, d4);
    swap(&mut d3, &mut d9);

    pos += 256;
    if pos == end {
      break;
    }
  }

  d6 = add(mul(k_mult, d6), _mm_cvtsi64_si128(n as i64));
  if n % 256 != 0 {
    let (_, tail) = s.split_at(end);
    d7 = add(_mm_shuffle_epi32::<0x39>(d8), d7);
    d8 = add(mul(k_mult, d8), _mm_cvtsi64_si128(xo::hash64(tail) as i64));
  }

  d0 = fold(k_mult, k_shuf, d0);
  d3 = fold(k_mult, k_shuf, d3);
  d9 = fold(k_mult, k_shuf, d9);
  d1 = fold(k_mult, k_shuf, d1);
  d0 = add(d11, d0);
  d3 = xor(d7, d3);
  d9 = add(d8, d9);
  d1 = add(d10, d1);
  d4 = add(d3, d4);
  d5 = add(d9, d5);
  d6 = xor(d1, d6);
  d2 = add(d0, d2);

  let mut t = [0u8; 128];
  for (chunk, v) in t.chunks_exact_mut(16).zip([d0, d3, d9, d1, d4, d5, d6, d2]) {
    _mm_storeu_si128(chunk.as_mut_ptr().cast(), v);
  }
  xo::hash64(&t)
}
