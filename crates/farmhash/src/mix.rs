//! Constants and finalizing mixers shared by every family.
//!
//! All functions are pure and total; arithmetic wraps.

use crate::{util::rotr32, value::Value128};

// Some primes between 2^63 and 2^64.
pub(crate) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(crate) const K1: u64 = 0xb492_b66f_be98_f273;
pub(crate) const K2: u64 = 0x9ae1_6a3b_2f90_404f;

// Murmur3 32-bit multipliers.
pub(crate) const C1: u32 = 0xcc9e_2d51;
pub(crate) const C2: u32 = 0x1b87_3593;

const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Murmur3 32-bit finalizer.
#[inline(always)]
pub(crate) const fn fmix(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Murmur3 combine step for two 32-bit values.
#[inline(always)]
pub(crate) const fn mur(a: u32, h: u32) -> u32 {
  let a = rotr32(a.wrapping_mul(C1), 17).wrapping_mul(C2);
  let h = rotr32(h ^ a, 19);
  h.wrapping_mul(5).wrapping_add(0xe654_6b64)
}

#[inline(always)]
pub(crate) const fn shift_mix(v: u64) -> u64 {
  v ^ (v >> 47)
}

/// Folds two 64-bit halves with the multiplier `mul`.
#[inline(always)]
pub(crate) const fn hash_len16(u: u64, v: u64, mul: u64) -> u64 {
  let a = shift_mix((u ^ v).wrapping_mul(mul));
  let b = shift_mix((v ^ a).wrapping_mul(mul));
  b.wrapping_mul(mul)
}

/// Folds a `(low, high)` pair into 64 bits.
#[inline(always)]
pub(crate) const fn hash128_to_64(low: u64, high: u64) -> u64 {
  hash_len16(low, high, K_MUL)
}

/// Frozen 128 → 64 bit fold backing the integer fingerprints.
#[inline]
#[must_use]
pub(crate) const fn fingerprint128_to_64(v: Value128) -> u64 {
  let a = shift_mix((v.low() ^ v.high()).wrapping_mul(K_MUL));
  let mut b = (v.high() ^ a).wrapping_mul(K_MUL);
  b ^= b >> 44;
  b = b.wrapping_mul(K_MUL);
  b ^= b >> 41;
  b.wrapping_mul(K_MUL)
}

// ─────────────────────────────────────────────────────────────────────────────
// Debug-build output scramble
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
pub(crate) const fn tweak32(x: u32) -> u32 {
  !x.wrapping_mul(C1).swap_bytes()
}

#[inline(always)]
pub(crate) const fn tweak64(x: u64) -> u64 {
  !x.wrapping_mul(K1).swap_bytes()
}

#[inline(always)]
pub(crate) const fn tweak128(x: Value128) -> Value128 {
  let mut y = tweak64(x.low());
  let mut z = tweak64(x.high());
  y = y.wrapping_add(z);
  z = z.wrapping_add(y);
  Value128::new(y, z.wrapping_mul(K1))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fmix_of_zero_is_zero() {
    assert_eq!(fmix(0), 0);
    assert_ne!(fmix(1), 1);
  }

  #[test]
  fn mur_matches_manual_expansion() {
    let (a, h) = (0x1234_5678u32, 0x9abc_def0u32);
    let mut x = a.wrapping_mul(C1);
    x = x.rotate_right(17);
    x = x.wrapping_mul(C2);
    let mut y = h ^ x;
    y = y.rotate_right(19);
    assert_eq!(mur(a, h), y.wrapping_mul(5).wrapping_add(0xe654_6b64));
  }

  #[test]
  fn integer_fingerprints_are_frozen() {
    assert_eq!(fingerprint128_to_64(Value128::new(42, 0)), 0x00ff_da76_068f_1108);
    assert_eq!(fingerprint128_to_64(Value128::new(1, 2)), 0x8cd5_6513_4b5d_fc5e);
  }

  #[test]
  fn tweaks_are_bijective_on_samples() {
    // Multiplication by an odd constant, byte swap and NOT are all invertible.
    let samples = [0u64, 1, 2, K0, K1, K2, u64::MAX];
    for (i, a) in samples.iter().enumerate() {
      for b in &samples[i + 1..] {
        assert_ne!(tweak64(*a), tweak64(*b));
        assert_ne!(tweak32(*a as u32), tweak32(*b as u32));
      }
    }
  }

  #[test]
  fn tweak128_mixes_both_words() {
    let base = tweak128(Value128::new(1, 2));
    assert_ne!(base, tweak128(Value128::new(1, 3)));
    assert_ne!(base, tweak128(Value128::new(0, 2)));
    let y = tweak64(1).wrapping_add(tweak64(2));
    assert_eq!(base.low(), y);
    assert_eq!(base.high(), tweak64(2).wrapping_add(y).wrapping_mul(K1));
  }
}
