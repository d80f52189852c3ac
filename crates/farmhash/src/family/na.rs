//! NA: the 64-bit baseline family.
//!
//! Inputs up to 64 bytes go through the length kernels; longer inputs run a
//! 64-byte block loop over five words of state. NA backs [`crate::fingerprint64`],
//! so its output must never change.

use crate::{
  kernels::{hash_len_0to64, weak_hash_len32_at},
  mix::{K0, K1, K2, hash_len16, hash128_to_64, shift_mix},
  util::{fetch64, rotr64},
};

const SEED: u64 = 81;

/// Hash `data` to 64 bits.
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  if data.len() <= 64 {
    return hash_len_0to64(data);
  }
  hash_long(data)
}

/// Hash `data` with one seed; equivalent to `hash64_with_seeds(data, K2, seed)`.
#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(data, K2, seed)
}

#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash128_to_64(hash64(data).wrapping_sub(seed0), seed1)
}

fn hash_long(s: &[u8]) -> u64 {
  let len = s.len();
  let mut x = SEED;
  let mut y = SEED.wrapping_mul(K1).wrapping_add(113);
  let mut z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
  let mut v = (0u64, 0u64);
  let mut w = (0u64, 0u64);
  x = x.wrapping_mul(K2).wrapping_add(fetch64(s, 0));

  // After the loop 1..=64 bytes remain; they are re-read as the final 64.
  let end = ((len - 1) / 64) * 64;
  let last64 = len - 64;
  let mut pos = 0;
  loop {
    x = rotr64(x.wrapping_add(y).wrapping_add(v.0).wrapping_add(fetch64(s, pos + 8)), 37).wrapping_mul(K1);
    y = rotr64(y.wrapping_add(v.1).wrapping_add(fetch64(s, pos + 48)), 42).wrapping_mul(K1);
    x ^= w.1;
    y = y.wrapping_add(v.0).wrapping_add(fetch64(s, pos + 40));
    z = rotr64(z.wrapping_add(w.0), 33).wrapping_mul(K1);
    v = weak_hash_len32_at(s, pos, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    w = weak_hash_len32_at(s, pos + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, pos + 16)));
    core::mem::swap(&mut z, &mut x);
    pos += 64;
    if pos == end {
      break;
    }
  }

  let mul = K1.wrapping_add((z & 0xff) << 1);
  let pos = last64;
  w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
  v.0 = v.0.wrapping_add(w.0);
  w.0 = w.0.wrapping_add(v.0);
  x = rotr64(x.wrapping_add(y).wrapping_add(v.0).wrapping_add(fetch64(s, pos + 8)), 37).wrapping_mul(mul);
  y = rotr64(y.wrapping_add(v.1).wrapping_add(fetch64(s, pos + 48)), 42).wrapping_mul(mul);
  x ^= w.1.wrapping_mul(9);
  y = y.wrapping_add(v.0.wrapping_mul(9)).wrapping_add(fetch64(s, pos + 40));
  z = rotr64(z.wrapping_add(w.0), 33).wrapping_mul(mul);
  v = weak_hash_len32_at(s, pos, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
  w = weak_hash_len32_at(s, pos + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, pos + 16)));
  core::mem::swap(&mut z, &mut x);
  hash_len16(
    hash_len16(v.0, w.0, mul).wrapping_add(shift_mix(y).wrapping_mul(K0)).wrapping_add(z),
    hash_len16(v.1, w.1, mul).wrapping_add(x),
    mul,
  )
}
