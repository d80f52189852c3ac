//! UO: NA for short inputs, an eight-word accumulator loop beyond 64 bytes.

use crate::{
  family::na,
  kernels::weak_hash_len32_at,
  mix::{K2, hash_len16, shift_mix},
  util::{fetch64, rotr64},
};

#[inline(always)]
const fn h(x: u64, y: u64, mul: u64, r: u32) -> u64 {
  let a = shift_mix((x ^ y).wrapping_mul(mul));
  let b = (y ^ a).wrapping_mul(mul);
  rotr64(b, r).wrapping_mul(mul)
}

#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  if data.len() <= 64 {
    return na::hash64(data);
  }
  hash64_with_seeds(data, 81, 0)
}

#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  if data.len() <= 64 {
    return na::hash64_with_seed(data, seed);
  }
  hash64_with_seeds(data, 0, seed)
}

#[must_use]
pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  let len = s.len();
  if len <= 64 {
    return na::hash64_with_seeds(s, seed0, seed1);
  }

  let mut x = seed0;
  let mut y = seed1.wrapping_mul(K2).wrapping_add(113);
  let mut z = shift_mix(y.wrapping_mul(K2)).wrapping_mul(K2);
  let mut v = (seed0, seed1);
  let mut w = (0u64, 0u64);
  let mut u = x.wrapping_sub(z);
  x = x.wrapping_mul(K2);
  let mul = K2.wrapping_add(u & 0x82);

  let end = ((len - 1) / 64) * 64;
  let last64 = len - 64;
  let mut pos = 0;
  loop {
    let a0 = fetch64(s, pos);
    let a1 = fetch64(s, pos + 8);
    let a2 = fetch64(s, pos + 16);
    let a3 = fetch64(s, pos + 24);
    let a4 = fetch64(s, pos + 32);
    let a5 = fetch64(s, pos + 40);
    let a6 = fetch64(s, pos + 48);
    let a7 = fetch64(s, pos + 56);
    x = x.wrapping_add(a0.wrapping_add(a1));
    y = y.wrapping_add(a2);
    z = z.wrapping_add(a3);
    v.0 = v.0.wrapping_add(a4);
    v.1 = v.1.wrapping_add(a5.wrapping_add(a1));
    w.0 = w.0.wrapping_add(a6);
    w.1 = w.1.wrapping_add(a7);

    x = rotr64(x, 26).wrapping_mul(9);
    y = rotr64(y, 29);
    z = z.wrapping_mul(mul);
    v.0 = rotr64(v.0, 33);
    v.1 = rotr64(v.1, 30);
    w.0 = (w.0 ^ x).wrapping_mul(9);
    z = rotr64(z, 32).wrapping_add(w.1);
    w.1 = w.1.wrapping_add(z);
    z = z.wrapping_mul(9);
    core::mem::swap(&mut u, &mut y);

    z = z.wrapping_add(a0.wrapping_add(a6));
    v.0 = v.0.wrapping_add(a2);
    v.1 = v.1.wrapping_add(a3);
    w.0 = w.0.wrapping_add(a4);
    w.1 = w.1.wrapping_add(a5.wrapping_add(a6));
    x = x.wrapping_add(a1);
    y = y.wrapping_add(a7);

    y = y.wrapping_add(v.0);
    v.0 = v.0.wrapping_add(x.wrapping_sub(y));
    v.1 = v.1.wrapping_add(w.0);
    w.0 = w.0.wrapping_add(v.1);
    w.1 = w.1.wrapping_add(x.wrapping_sub(y));
    x = x.wrapping_add(w.1);
    w.1 = rotr64(w.1, 34);
    core::mem::swap(&mut u, &mut z);
    pos += 64;
    if pos == end {
      break;
    }
  }

  let pos = last64;
  u = u.wrapping_mul(9);
  v.1 = rotr64(v.1, 28);
  v.0 = rotr64(v.0, 20);
  w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
  u = u.wrapping_add(y);
  y = y.wrapping_add(u);
  x = rotr64(y.wrapping_sub(x).wrapping_add(v.0).wrapping_add(fetch64(s, pos + 8)), 37).wrapping_mul(mul);
  y = rotr64(y ^ v.1 ^ fetch64(s, pos + 48), 42).wrapping_mul(mul);
  x ^= w.1.wrapping_mul(9);
  y = y.wrapping_add(v.0).wrapping_add(fetch64(s, pos + 40));
  z = rotr64(z.wrapping_add(w.0), 33).wrapping_mul(mul);
  v = weak_hash_len32_at(s, pos, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
  w = weak_hash_len32_at(s, pos + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, pos + 16)));
  h(
    hash_len16(v.0.wrapping_add(x), w.0 ^ y, mul).wrapping_add(z).wrapping_sub(u),
    h(v.1.wrapping_add(y), w.1.wrapping_add(z), K2, 30) ^ x,
    K2,
    31,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_inputs_match_na() {
    let data: [u8; 64] = core::array::from_fn(|i| (i as u8) ^ 0x5a);
    for len in [0, 1, 15, 16, 31, 32, 33, 63, 64] {
      assert_eq!(hash64(&data[..len]), na::hash64(&data[..len]));
      assert_eq!(hash64_with_seed(&data[..len], 9), na::hash64_with_seed(&data[..len], 9));
      assert_eq!(hash64_with_seeds(&data[..len], 1, 2), na::hash64_with_seeds(&data[..len], 1, 2));
    }
  }

  #[test]
  fn long_inputs_diverge_from_na() {
    let data = [0xa5u8; 65];
    assert_ne!(hash64(&data), na::hash64(&data));
  }

  #[test]
  fn seeds_matter_beyond_64_bytes() {
    let data = [1u8; 200];
    assert_ne!(hash64_with_seeds(&data, 1, 2), hash64_with_seeds(&data, 2, 1));
    assert_ne!(hash64_with_seed(&data, 0), hash64_with_seed(&data, 1));
  }
}
