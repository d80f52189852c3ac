//! Runtime CPU detection.
//!
//! Handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via CPUID through `is_x86_feature_detected!`, std only)
//! - Caching (via `OnceLock` with `std`; without `std` only compile-time
//!   features are reported, which is a constant)
//! - User-supplied overrides for bare metal and testing
//! - Miri fallback (always returns portable caps)

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::caps::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────
//
// The override takes precedence over detection in `caps()`. Unlike the
// detection cache it can be set and cleared any number of times. It never
// changes `hardware_caps()`.

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

/// Set or clear the capabilities override.
pub fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.raw(), Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

#[inline]
fn get_override() -> Option<Caps> {
  if !OVERRIDE_SET.load(Ordering::Acquire) {
    return None;
  }
  Some(Caps::from_bits(OVERRIDE_BITS.load(Ordering::Acquire)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Detected (or overridden) capabilities.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }

  match get_override() {
    Some(caps) => caps,
    None => hardware_caps(),
  }
}

/// Capabilities the hardware reports, cached after the first call. Ignores the override.
#[inline]
#[must_use]
pub fn hardware_caps() -> Caps {
  // Miri cannot interpret SIMD intrinsics, so always return portable.
  if cfg!(miri) {
    return Caps::NONE;
  }

  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Caps> = OnceLock::new();
    *CACHED.get_or_init(detect)
  }

  #[cfg(not(feature = "std"))]
  {
    detect()
  }
}

fn detect() -> Caps {
  #[cfg(target_arch = "x86_64")]
  {
    let caps = compile_time_x86();
    #[cfg(feature = "std")]
    let caps = caps.union(runtime_x86());
    caps
  }

  #[cfg(not(target_arch = "x86_64"))]
  {
    Caps::NONE
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86_64 detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
const fn compile_time_x86() -> Caps {
  use crate::caps::x86;

  // SSE2 is part of the x86_64 baseline.
  let mut caps = x86::SSE2;

  if cfg!(target_feature = "ssse3") {
    caps = caps.union(x86::SSSE3);
  }
  if cfg!(target_feature = "sse4.1") {
    caps = caps.union(x86::SSE41);
  }
  if cfg!(target_feature = "sse4.2") {
    caps = caps.union(x86::SSE42);
  }
  if cfg!(target_feature = "aes") {
    caps = caps.union(x86::AESNI);
  }
  caps
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
fn runtime_x86() -> Caps {
  use crate::caps::x86;

  let mut caps = Caps::NONE;

  if std::arch::is_x86_feature_detected!("ssse3") {
    caps |= x86::SSSE3;
  }
  if std::arch::is_x86_feature_detected!("sse4.1") {
    caps |= x86::SSE41;
  }
  if std::arch::is_x86_feature_detected!("sse4.2") {
    caps |= x86::SSE42;
  }
  if std::arch::is_x86_feature_detected!("aes") {
    caps |= x86::AESNI;
  }
  caps
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::caps::x86;

  #[test]
  fn detection_is_consistent() {
    assert_eq!(detect(), detect());
    if !cfg!(miri) {
      assert_eq!(hardware_caps(), detect());
    }
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", not(miri)))]
  fn x86_64_baseline_has_sse2() {
    assert!(hardware_caps().has(x86::SSE2));
  }

  // One test owns the process-wide override so assertions cannot interleave.
  #[test]
  fn override_wins_until_cleared_and_never_reaches_hardware() {
    let before = caps();
    let hardware = hardware_caps();
    set_caps_override(Some(x86::CRC32C_AES_READY | x86::SSE2));
    assert_eq!(
      caps(),
      if cfg!(miri) { Caps::NONE } else { x86::CRC32C_AES_READY | x86::SSE2 }
    );
    assert_eq!(hardware_caps(), hardware);
    set_caps_override(None);
    assert_eq!(caps(), before);
    assert_eq!(hardware_caps(), hardware);
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", feature = "std", not(miri)))]
  fn runtime_detection_agrees_with_std() {
    let caps = hardware_caps();
    assert_eq!(caps.has(x86::SSE42), std::arch::is_x86_feature_detected!("sse4.2"));
    assert_eq!(caps.has(x86::AESNI), std::arch::is_x86_feature_detected!("aes"));
  }
}
