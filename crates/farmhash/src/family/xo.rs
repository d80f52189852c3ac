//! XO: the portable 64-bit family behind [`crate::hash64`] when TE is unavailable.
//!
//! Adds dedicated 33–64 and 65–96 byte schedules, then defers to NA up to 256
//! bytes and to UO beyond. Seeded variants are UO.

use crate::{
  family::{na, uo},
  kernels::{hash_len_0to16, hash_len_17to32},
  mix::{K1, K2, shift_mix},
  util::{fetch64, rotr64},
};

/// 32-byte mix at `s[offset..offset + 32]`.
#[inline(always)]
fn h32(s: &[u8], offset: usize, mul: u64, seed0: u64, seed1: u64) -> u64 {
  let a = fetch64(s, offset).wrapping_mul(K1);
  let b = fetch64(s, offset + 8);
  let c = fetch64(s, offset + 24).wrapping_mul(mul);
  let d = fetch64(s, offset + 16).wrapping_mul(K2);
  let u = rotr64(a.wrapping_add(b), 43)
    .wrapping_add(rotr64(c, 30))
    .wrapping_add(d)
    .wrapping_add(seed0);
  let v = a
    .wrapping_add(rotr64(b.wrapping_add(K2), 18))
    .wrapping_add(c)
    .wrapping_add(seed1);
  let a = shift_mix((u ^ v).wrapping_mul(mul));
  shift_mix((v ^ a).wrapping_mul(mul))
}

fn hash_len_33to64(s: &[u8]) -> u64 {
  let len = s.len() as u64;
  let mul0 = K2.wrapping_sub(30);
  let mul1 = mul0.wrapping_add(len.wrapping_mul(2));
  let h0 = h32(s, 0, mul0, 0, 0);
  let h1 = h32(s, s.len() - 32, mul1, 0, 0);
  h1.wrapping_mul(mul1).wrapping_add(h0).wrapping_mul(mul1)
}

fn hash_len_65to96(s: &[u8]) -> u64 {
  let len = s.len() as u64;
  let mul0 = K2.wrapping_sub(114);
  let mul1 = mul0.wrapping_add(len.wrapping_mul(2));
  let h0 = h32(s, 0, mul0, 0, 0);
  let h1 = h32(s, 32, mul1, 0, 0);
  let h2 = h32(s, s.len() - 32, mul1, h0, h1);
  h2.wrapping_mul(9)
    .wrapping_add(h0 >> 17)
    .wrapping_add(h1 >> 21)
    .wrapping_mul(mul1)
}

#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  match data.len() {
    0..=16 => hash_len_0to16(data),
    17..=32 => hash_len_17to32(data),
    33..=64 => hash_len_33to64(data),
    65..=96 => hash_len_65to96(data),
    97..=256 => na::hash64(data),
    _ => uo::hash64(data),
  }
}

#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  uo::hash64_with_seed(data, seed)
}

#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  uo::hash64_with_seeds(data, seed0, seed1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn agrees_with_na_up_to_32_bytes() {
    let data: [u8; 32] = core::array::from_fn(|i| i as u8);
    for len in 0..=32 {
      assert_eq!(hash64(&data[..len]), na::hash64(&data[..len]), "len {len}");
    }
  }

  #[test]
  fn own_schedule_from_33_to_96_bytes() {
    let data: [u8; 97] = core::array::from_fn(|i| (i * 7) as u8);
    for len in [33, 64, 65, 96] {
      assert_ne!(hash64(&data[..len]), na::hash64(&data[..len]), "len {len}");
    }
    assert_eq!(hash64(&data[..97]), na::hash64(&data[..97]));
  }

  #[test]
  fn beyond_256_is_uo() {
    let data = [3u8; 300];
    assert_eq!(hash64(&data[..256]), na::hash64(&data[..256]));
    assert_eq!(hash64(&data[..257]), uo::hash64(&data[..257]));
  }
}
