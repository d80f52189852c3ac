//! Runtime configuration (overrides + build flags).
//!
//! This module centralizes the selection knobs for the general-purpose
//! `hash*` entrypoints:
//! - an optional forced mode read from `FARMHASH_FORCE` (std only)
//! - capabilities assumed at build time (`assume-*` features)
//! - the debug-build output scramble
//!
//! Forced modes only ever narrow selection. Fingerprints ignore all of it.

use platform::{Caps, caps::x86};

/// Whether general-purpose hashes are scrambled by the debug tweak.
///
/// `debug-tweak` forces it on, `no-debug-tweak` forces it off, otherwise it
/// follows `debug_assertions`.
pub const DEBUG_TWEAK: bool = if cfg!(feature = "no-debug-tweak") {
  false
} else {
  cfg!(feature = "debug-tweak") || cfg!(debug_assertions)
};

/// Capabilities the build promises regardless of detection.
pub const ASSUMED_CAPS: Caps = {
  let mut caps = Caps::NONE;
  if cfg!(feature = "assume-sse41") {
    caps = caps.union(x86::SSSE3).union(x86::SSE41);
  }
  if cfg!(feature = "assume-sse42") {
    caps = caps.union(x86::CRC32C_READY);
  }
  if cfg!(feature = "assume-aesni") {
    caps = caps.union(x86::AESNI);
  }
  caps
};

/// Forced family selection for the general-purpose entrypoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Best family the capabilities allow.
  #[default]
  Auto,
  /// Always-available families only: XO for 64-bit, MK for 32-bit.
  Portable,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
    }
  }

  /// Parse a force mode name. Case-insensitive; surrounding whitespace is ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("scalar") {
      return Some(Self::Portable);
    }
    None
  }
}

/// Effective configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Force mode read from the environment.
  pub force: Force,
  /// Capabilities assumed by build features.
  pub assumed: Caps,
  /// Whether general-purpose outputs are scrambled.
  pub debug_tweak: bool,
}

#[cfg(feature = "std")]
fn read_env_force() -> Force {
  std::env::var("FARMHASH_FORCE")
    .ok()
    .and_then(|value| Force::parse(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn env_force() -> Force {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Force> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn env_force() -> Force {
  Force::Auto
}

/// Capabilities selection runs against: detected plus assumed.
#[inline]
#[must_use]
pub fn selection_caps() -> Caps {
  platform::caps().union(ASSUMED_CAPS)
}

/// Get the effective configuration for this process.
#[inline]
#[must_use]
pub fn get() -> Config {
  Config {
    force: env_force(),
    assumed: ASSUMED_CAPS,
    debug_tweak: DEBUG_TWEAK,
  }
}
