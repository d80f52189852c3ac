//! TE: SIMD-accelerated 64-bit family (x86_64, SSSE3 + SSE4.1).
//!
//! Inputs of 512 bytes or more run a 256-byte super-block kernel over twelve
//! 128-bit lanes; shorter inputs are XO. The capability gate applies to every
//! call regardless of length.

use platform::Caps;

use crate::{
  family::{FamilyId, UnsupportedError, check, misconfigured, xo},
  mix::{K1, K2},
};

#[cfg(target_arch = "x86_64")]
mod x86_64;

pub const ID: FamilyId = FamilyId::Te;

/// Inputs at least this long take the SIMD kernel.
pub const LONG_THRESHOLD: usize = 512;

#[inline]
#[must_use]
pub fn is_available() -> bool {
  ID.is_available()
}

#[inline]
#[must_use]
pub const fn required_caps() -> Caps {
  ID.required_caps()
}

/// # Panics
///
/// If the CPU lacks SSSE3 or SSE4.1, or the target is not x86_64.
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  try_hash64(data).unwrap_or_else(|err| misconfigured(err))
}

/// # Panics
///
/// As [`hash64`].
#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  try_hash64_with_seed(data, seed).unwrap_or_else(|err| misconfigured(err))
}

/// # Panics
///
/// As [`hash64`].
#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  try_hash64_with_seeds(data, seed0, seed1).unwrap_or_else(|err| misconfigured(err))
}

#[inline]
pub fn try_hash64(data: &[u8]) -> Result<u64, UnsupportedError> {
  check(ID)?;
  Ok(if data.len() >= LONG_THRESHOLD {
    long(data, K2, K1)
  } else {
    xo::hash64(data)
  })
}

#[inline]
pub fn try_hash64_with_seed(data: &[u8], seed: u64) -> Result<u64, UnsupportedError> {
  check(ID)?;
  Ok(if data.len() >= LONG_THRESHOLD {
    long(data, K1, seed)
  } else {
    xo::hash64_with_seed(data, seed)
  })
}

#[inline]
pub fn try_hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> Result<u64, UnsupportedError> {
  check(ID)?;
  Ok(if data.len() >= LONG_THRESHOLD {
    long(data, seed0, seed1)
  } else {
    xo::hash64_with_seeds(data, seed0, seed1)
  })
}

/// Only reachable after [`check`] succeeded.
#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
#[inline]
fn long(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  // SAFETY: every caller passed `check(ID)`, which found SSSE3 and SSE4.1 in the
  // hardware-reported set.
  unsafe {
    x86_64::hash64_long(data, seed0, seed1)
  }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn long(_data: &[u8], _seed0: u64, _seed1: u64) -> u64 {
  unreachable!("te is gated to x86_64")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn try_agrees_with_availability() {
    let data = [0u8; 600];
    assert_eq!(try_hash64(&data).is_ok(), is_available());
    if let Err(err) = try_hash64(&data) {
      assert_eq!(err.algorithm(), "te");
      assert!(!err.missing().is_empty());
    }
  }

  #[test]
  fn short_inputs_are_xo() {
    if !is_available() {
      return;
    }
    let data: [u8; 511] = core::array::from_fn(|i| (i * 17 + 3) as u8);
    for len in [0, 1, 16, 64, 65, 96, 97, 256, 257, 511] {
      assert_eq!(hash64(&data[..len]), xo::hash64(&data[..len]), "len {len}");
      assert_eq!(hash64_with_seed(&data[..len], 5), xo::hash64_with_seed(&data[..len], 5));
      assert_eq!(hash64_with_seeds(&data[..len], 5, 6), xo::hash64_with_seeds(&data[..len], 5, 6));
    }
  }

  #[test]
  fn long_kernel_sees_every_block_and_the_tail() {
    if !is_available() {
      return;
    }
    let mut data = [0x5au8; 1024 + 17];
    let base = hash64(&data);
    for at in [0, 255, 256, 700, 1023, 1024 + 16] {
      data[at] ^= 1;
      assert_ne!(hash64(&data), base, "flip at {at}");
      data[at] ^= 1;
    }
    assert_ne!(hash64(&data[..512]), xo::hash64(&data[..512]));
  }
}
