//! CPU capability detection for the farmhash workspace.
//!
//! This crate is the **single source of truth** for "which instructions may run
//! here?". Hash crates query [`caps()`] instead of doing ad-hoc detection.
//!
//! # Main Entry Point
//!
//! ```
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::CRC32C_READY) {
//!   // SSE4.2 family kernels are legal
//! }
//! ```
//!
//! # Design
//!
//! 1. **One API**: every selection goes through [`caps()`].
//! 2. **Zero-cost when possible**: compile-time features are folded in via `cfg!`.
//! 3. **Cached otherwise**: runtime detection is cached in a `OnceLock` (std).
//! 4. **Overridable**: [`set_caps_override`] pins the answer for tests and bare metal;
//!    [`hardware_caps()`] never sees it.
//! 5. **Miri-safe**: under Miri, always returns portable-only caps.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod caps;
mod detect;

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

pub use caps::{Arch, Caps};

/// Get detected CPU capabilities.
///
/// # Caching
///
/// - With `std`: compile-time plus runtime-detected features, cached in a `OnceLock`.
/// - Without `std`: compile-time features only (a constant).
///
/// An active override (see [`set_caps_override`]) takes precedence.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}

/// Capabilities the hardware actually reports, ignoring any override.
///
/// Kernels that execute feature-gated instructions must be gated on this set:
/// an override may claim features the CPU does not have.
///
/// ```
/// use platform::caps::x86;
///
/// let hardware = platform::hardware_caps();
/// platform::set_caps_override(Some(x86::CRC32C_AES_READY));
/// assert_eq!(platform::hardware_caps(), hardware);
/// platform::set_caps_override(None);
/// ```
#[inline]
#[must_use]
pub fn hardware_caps() -> Caps {
  detect::hardware_caps()
}

/// Set or clear the capabilities override.
///
/// When set, [`caps()`] returns the override value instead of detecting.
/// Pass `None` to resume detection.
///
/// # Example
///
/// ```
/// use platform::Caps;
///
/// platform::set_caps_override(Some(Caps::NONE));
/// assert!(platform::caps().is_empty());
/// platform::set_caps_override(None);
/// ```
#[inline]
pub fn set_caps_override(value: Option<Caps>) {
  detect::set_caps_override(value);
}
