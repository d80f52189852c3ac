//! Error types shared by hash crates.
//!
//! Hashing itself never fails. The only failure mode is asking for a kernel the
//! CPU cannot execute, which callers may check for with the `try_*` entrypoints.

use core::fmt;

use platform::Caps;

/// A capability-gated algorithm was requested on a CPU that lacks its features.
///
/// # Examples
///
/// ```
/// use platform::caps::x86;
/// use traits::UnsupportedError;
///
/// let err = UnsupportedError::new("te", x86::SHUFFLE_MUL_READY, x86::SSE2 | x86::SSSE3);
/// assert_eq!(err.missing(), x86::SSE41);
/// assert_eq!(err.to_string(), "te requires [ssse3, sse4.1] but the CPU lacks [sse4.1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnsupportedError {
  algorithm: &'static str,
  required: Caps,
  available: Caps,
}

impl UnsupportedError {
  #[inline]
  #[must_use]
  pub const fn new(algorithm: &'static str, required: Caps, available: Caps) -> Self {
    Self {
      algorithm,
      required,
      available,
    }
  }

  /// Name of the algorithm that could not run.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &'static str {
    self.algorithm
  }

  /// Full capability set the algorithm needs.
  #[inline]
  #[must_use]
  pub const fn required(&self) -> Caps {
    self.required
  }

  /// Required features the CPU does not report.
  #[inline]
  #[must_use]
  pub const fn missing(&self) -> Caps {
    self.required.missing_from(self.available)
  }
}

impl fmt::Display for UnsupportedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} requires {} but the CPU lacks {}",
      self.algorithm,
      self.required,
      self.missing()
    )
  }
}

impl core::error::Error for UnsupportedError {}
