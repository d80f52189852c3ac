//! NT: TE truncated to 32 bits. Shares TE's capability gate.

use platform::Caps;

use crate::family::{FamilyId, UnsupportedError, check, misconfigured, te};

pub const ID: FamilyId = FamilyId::Nt;

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
pub fn hash32(data: &[u8]) -> u32 {
  try_hash32(data).unwrap_or_else(|err| misconfigured(err))
}

/// The seed is widened to 64 bits and fed to TE's single-seed variant.
///
/// # Panics
///
/// As [`hash32`].
#[inline]
#[must_use]
pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
  try_hash32_with_seed(data, seed).unwrap_or_else(|err| misconfigured(err))
}

#[inline]
pub fn try_hash32(data: &[u8]) -> Result<u32, UnsupportedError> {
  check(ID)?;
  Ok(te::hash64(data) as u32)
}

#[inline]
pub fn try_hash32_with_seed(data: &[u8], seed: u32) -> Result<u32, UnsupportedError> {
  check(ID)?;
  Ok(te::hash64_with_seed(data, u64::from(seed)) as u32)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::family::xo;

  #[test]
  fn truncates_xo_below_long_threshold() {
    if !is_available() {
      assert_eq!(try_hash32(b"x").map_err(|e| e.algorithm()), Err("nt"));
      return;
    }
    let data: [u8; 64] = core::array::from_fn(|i| i as u8);
    for len in 0..=64 {
      assert_eq!(hash32(&data[..len]), xo::hash64(&data[..len]) as u32);
      assert_eq!(hash32_with_seed(&data[..len], 11), xo::hash64_with_seed(&data[..len], 11) as u32);
    }
  }
}
