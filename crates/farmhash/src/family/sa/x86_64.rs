//! SA lane kernel (SSSE3 + SSE4.1 + SSE4.2).
//!
//! # Safety
//!
//! Callers must ensure all three features are available.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::*;

use crate::family::{
  mk,
  sse::{self, Lanes, add, fetch128, shuf, shuffle0321, splat, xor},
};

/// One 80-byte chunk at `s[at..at + 80]`.
#[inline]
#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
unsafe fn chunk(st: &mut Lanes, s: &[u8], at: usize) {
  let a = fetch128(s, at);
  let b = fetch128(s, at + 16);
  let c = fetch128(s, at + 32);
  let d = fetch128(s, at + 48);
  let e = fetch128(s, at + 64);
  st.h = add(st.h, a);
  st.g = add(st.g, b);
  st.g = shuffle0321(st.g);
  st.f = add(st.f, c);
  let be = add(b, st.mulc1(e));
  st.h = add(st.h, st.f);
  st.f = add(st.f, st.h);
  st.h = add(st.murk(d, st.h), e);
  st.k = xor(st.k, shuf(st.g, st.f));
  st.g = add(xor(c, st.g), a);
  st.f = add(xor(be, st.f), d);
  st.k = add(st.k, be);
  st.k = add(st.k, shuf(st.f, st.h));
  st.f = add(st.f, st.g);
  st.g = add(st.g, st.f);
  st.f = st.mulc1(st.f);
}

#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn hash32(s: &[u8]) -> u32 {
  let len = s.len();
  if len <= 24 {
    return mk::hash32(s);
  }
  if len < 40 {
    return sse::hash32_len_25to39::<false>(s);
  }

  let mut st = Lanes::new();
  if len < 80 {
    st.block_40to79(s);
  } else {
    let iters = (len - 1) / 80;
    for i in 0..iters {
      chunk(&mut st, s, i * 80);
    }
    let rem = len - iters * 80;
    st.h = add(st.h, splat(rem as u32));
    chunk(&mut st, s, len - 80);
  }
  // No fifth lane: XOR with zero leaves `k` and `h` untouched.
  st.finish(_mm_setzero_si128())
}

#[target_feature(enable = "ssse3,sse4.1,sse4.2")]
pub(super) unsafe fn hash32_with_seed(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  if len <= 24 {
    return mk::hash32_short_with_seed(s, seed);
  }
  let (head, tail) = s.split_at(24);
  let h = mk::hash32_len_13to24(head, seed ^ len as u32);
  sse::crc32(hash32(tail).wrapping_add(seed), h)
}
