//! SA: 32-bit SIMD family using CRC32-C (x86_64, SSSE3 + SSE4.1 + SSE4.2).
//!
//! The same lane schedule as SU without the AES lane, and a software `mur`
//! in place of the inner CRC on 25..=39 byte inputs.

use platform::Caps;

use crate::family::{FamilyId, UnsupportedError, check, misconfigured};

#[cfg(target_arch = "x86_64")]
mod x86_64;

pub const ID: FamilyId = FamilyId::Sa;

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
/// If the CPU lacks any of SSSE3, SSE4.1 or SSE4.2, or the target is not x86_64.
#[inline]
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  try_hash32(data).unwrap_or_else(|err| misconfigured(err))
}

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
  Ok(kernel::hash32(data))
}

#[inline]
pub fn try_hash32_with_seed(data: &[u8], seed: u32) -> Result<u32, UnsupportedError> {
  check(ID)?;
  Ok(kernel::hash32_with_seed(data, seed))
}

/// Only reachable after [`check`] succeeded.
#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
mod kernel {
  #[inline]
  pub(super) fn hash32(data: &[u8]) -> u32 {
    // SAFETY: callers passed `check(ID)`, which found SSSE3, SSE4.1 and SSE4.2 in
    // the hardware-reported set.
    unsafe { super::x86_64::hash32(data) }
  }

  #[inline]
  pub(super) fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
    // SAFETY: as above.
    unsafe { super::x86_64::hash32_with_seed(data, seed) }
  }
}

#[cfg(not(target_arch = "x86_64"))]
mod kernel {
  pub(super) fn hash32(_data: &[u8]) -> u32 {
    unreachable!("sa is gated to x86_64")
  }

  pub(super) fn hash32_with_seed(_data: &[u8], _seed: u32) -> u32 {
    unreachable!("sa is gated to x86_64")
  }
}
