//! Length-bucketed 64-bit kernels shared by NA, UO, XO and CC.
//!
//! Bucket boundaries are inclusive on the high side: exactly 16 bytes runs
//! [`hash_len_0to16`], exactly 32 runs [`hash_len_17to32`], exactly 64 runs
//! [`hash_len_33to64`].

#![allow(clippy::indexing_slicing)] // Single-byte reads in the 1..=3 bucket

use crate::{
  mix::{K0, K1, K2, hash_len16, shift_mix},
  util::{fetch32, fetch64, rotr64},
};

#[inline(always)]
const fn len_mul(len: usize) -> u64 {
  K2.wrapping_add((len as u64).wrapping_mul(2))
}

/// `s.len()` must be at most 16.
#[inline]
pub(crate) fn hash_len_0to16(s: &[u8]) -> u64 {
  let len = s.len();
  if len >= 8 {
    let mul = len_mul(len);
    let a = fetch64(s, 0).wrapping_add(K2);
    let b = fetch64(s, len - 8);
    let c = rotr64(b, 37).wrapping_mul(mul).wrapping_add(a);
    let d = rotr64(a, 25).wrapping_add(b).wrapping_mul(mul);
    return hash_len16(c, d, mul);
  }
  if len >= 4 {
    let mul = len_mul(len);
    let a = fetch32(s, 0) as u64;
    return hash_len16((len as u64).wrapping_add(a << 3), fetch32(s, len - 4) as u64, mul);
  }
  if len > 0 {
    let a = s[0] as u32;
    let b = s[len >> 1] as u32;
    let c = s[len - 1] as u32;
    let y = a.wrapping_add(b << 8);
    let z = (len as u32).wrapping_add(c << 2);
    return shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0)).wrapping_mul(K2);
  }
  K2
}

/// `s.len()` must be in `17..=32`.
#[inline]
pub(crate) fn hash_len_17to32(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = len_mul(len);
  let a = fetch64(s, 0).wrapping_mul(K1);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  hash_len16(
    rotr64(a.wrapping_add(b), 43).wrapping_add(rotr64(c, 30)).wrapping_add(d),
    a.wrapping_add(rotr64(b.wrapping_add(K2), 18)).wrapping_add(c),
    mul,
  )
}

/// `s.len()` must be in `33..=64`.
#[inline]
pub(crate) fn hash_len_33to64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = len_mul(len);
  let a = fetch64(s, 0).wrapping_mul(K2);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  let y = rotr64(a.wrapping_add(b), 43).wrapping_add(rotr64(c, 30)).wrapping_add(d);
  let z = hash_len16(y, a.wrapping_add(rotr64(b.wrapping_add(K2), 18)).wrapping_add(c), mul);
  let e = fetch64(s, 16).wrapping_mul(mul);
  let f = fetch64(s, 24);
  let g = y.wrapping_add(fetch64(s, len - 32)).wrapping_mul(mul);
  let h = z.wrapping_add(fetch64(s, len - 24)).wrapping_mul(mul);
  hash_len16(
    rotr64(e.wrapping_add(f), 43).wrapping_add(rotr64(g, 30)).wrapping_add(h),
    e.wrapping_add(rotr64(f.wrapping_add(a), 18)).wrapping_add(g),
    mul,
  )
}

/// Dispatches `s.len() <= 64` to the matching bucket.
#[inline]
pub(crate) fn hash_len_0to64(s: &[u8]) -> u64 {
  match s.len() {
    0..=16 => hash_len_0to16(s),
    17..=32 => hash_len_17to32(s),
    _ => hash_len_33to64(s),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Weak 128-bit accumulator step
// ─────────────────────────────────────────────────────────────────────────────

/// Quick and dirty 16-byte mix of four words and two seeds. Not a finished hash.
#[inline(always)]
pub(crate) const fn weak_hash_len32_with_seeds(w: u64, x: u64, y: u64, z: u64, a: u64, b: u64) -> (u64, u64) {
  let mut a = a.wrapping_add(w);
  let mut b = rotr64(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x).wrapping_add(y);
  b = b.wrapping_add(rotr64(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len32_with_seeds`] over the 32 bytes at `s[offset..]`.
#[inline(always)]
pub(crate) fn weak_hash_len32_at(s: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  weak_hash_len32_with_seeds(
    fetch64(s, offset),
    fetch64(s, offset + 8),
    fetch64(s, offset + 16),
    fetch64(s, offset + 24),
    a,
    b,
  )
}
