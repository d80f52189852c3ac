//! Hash families.
//!
//! Each family is a complete, named algorithm with its own output schedule.
//! NA, UO, XO, MK and CC are portable and always available. TE and NT need
//! SSSE3 + SSE4.1 on x86_64, SA adds SSE4.2, and SU adds AES-NI on top of SA.
//!
//! Calling a gated family on a CPU without its features panics; every gated
//! family also offers `try_*` entrypoints that return [`UnsupportedError`]
//! instead.
//!
//! ```
//! use farmhash::family::{FamilyId, te, xo};
//!
//! let data = b"pinned to one family";
//! if FamilyId::Te.is_available() {
//!   // Below 512 bytes TE is XO.
//!   assert_eq!(te::hash64(data), xo::hash64(data));
//! } else {
//!   assert!(te::try_hash64(data).is_err());
//! }
//! ```

use core::fmt;

use platform::{Caps, caps::x86};
pub use traits::UnsupportedError;

pub mod cc;
pub mod mk;
pub mod na;
pub mod nt;
pub mod sa;
pub mod su;
pub mod te;
pub mod uo;
pub mod xo;

#[cfg(target_arch = "x86_64")]
mod sse;

/// Identifies one hash family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FamilyId {
  Na,
  Uo,
  Xo,
  Te,
  Nt,
  Mk,
  Su,
  Sa,
  Cc,
}

impl FamilyId {
  pub const ALL: [Self; 9] = [
    Self::Na,
    Self::Uo,
    Self::Xo,
    Self::Te,
    Self::Nt,
    Self::Mk,
    Self::Su,
    Self::Sa,
    Self::Cc,
  ];

  /// Short lowercase name (`"na"`, `"te"`, ...).
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Na => "na",
      Self::Uo => "uo",
      Self::Xo => "xo",
      Self::Te => "te",
      Self::Nt => "nt",
      Self::Mk => "mk",
      Self::Su => "su",
      Self::Sa => "sa",
      Self::Cc => "cc",
    }
  }

  /// Capabilities the family needs on x86_64. Empty for portable families.
  #[inline]
  #[must_use]
  pub const fn required_caps(self) -> Caps {
    match self {
      Self::Te | Self::Nt => x86::SHUFFLE_MUL_READY,
      Self::Sa => x86::CRC32C_READY,
      Self::Su => x86::CRC32C_AES_READY,
      Self::Na | Self::Uo | Self::Xo | Self::Mk | Self::Cc => Caps::NONE,
    }
  }

  #[inline]
  #[must_use]
  pub const fn is_gated(self) -> bool {
    !self.required_caps().is_empty()
  }

  /// Whether the family can run on this CPU right now.
  #[inline]
  #[must_use]
  pub fn is_available(self) -> bool {
    check(self).is_ok()
  }

  /// Output width in bits of the family's unseeded hash.
  #[inline]
  #[must_use]
  pub const fn output_bits(self) -> u32 {
    match self {
      Self::Na | Self::Uo | Self::Xo | Self::Te => 64,
      Self::Nt | Self::Mk | Self::Su | Self::Sa => 32,
      Self::Cc => 128,
    }
  }
}

impl fmt::Display for FamilyId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability gate
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that `id` may run against the live capability set.
///
/// The live set is the override (if any) intersected with what the hardware
/// reports. An override can hide features but never invent them.
pub(crate) fn check(id: FamilyId) -> Result<(), UnsupportedError> {
  let required = id.required_caps();
  if required.is_empty() {
    return Ok(());
  }
  // Gated families only exist on x86_64; elsewhere nothing counts as available.
  let available = if cfg!(target_arch = "x86_64") {
    platform::caps().intersection(platform::hardware_caps())
  } else {
    Caps::NONE
  };
  if available.has(required) {
    Ok(())
  } else {
    Err(UnsupportedError::new(id.as_str(), required, available))
  }
}

/// Fatal misconfiguration: a gated family ran without its features.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn misconfigured(err: UnsupportedError) -> ! {
  panic!("farmhash: {err}")
}
