//! FarmHash: capability-dispatched 32/64/128-bit hashing and stable fingerprints.
//!
//! Two kinds of entrypoint live side by side:
//!
//! | Entrypoint | Family | Stable? |
//! |------------|--------|---------|
//! | [`hash32`], [`hash32_with_seed`] | NT, SU, SA or MK (best available) | No |
//! | [`hash64`] | TE or XO (best available) | No |
//! | [`hash64_with_seed`], [`hash64_with_seeds`] | NA | No |
//! | [`hash128`], [`hash128_with_seed`] | CC | No |
//! | [`fingerprint32`] | MK | **Forever** |
//! | [`fingerprint64`] | NA | **Forever** |
//! | [`fingerprint128`] | CC | **Forever** |
//!
//! General-purpose `hash*` outputs may change with the CPU, the build profile
//! or the crate version. In debug builds they are additionally scrambled (see
//! [`config::DEBUG_TWEAK`]) so nothing comes to depend on them. Fingerprints
//! are pinned to one portable family each and never change.
//!
//! # Example
//!
//! ```rust
//! use farmhash::{Value128, fingerprint32, fingerprint64, fingerprint128};
//!
//! assert_eq!(fingerprint32(b"abc"), 795_041_479);
//! assert_eq!(fingerprint64(b"abc"), 0x24a5_b3a0_74e7_f369);
//! assert_eq!(
//!   fingerprint128(b"abc"),
//!   Value128::new(0x3980_b2af_d212_6c04, 0xa085_f090_1302_9e45)
//! );
//!
//! // Process-local hashing: fast, not portable.
//! let bucket = farmhash::hash64(b"some key") % 1024;
//! # let _ = bucket;
//! ```
//!
//! # Hardware Acceleration
//!
//! | Family | Requires (x86_64) |
//! |--------|-------------------|
//! | TE, NT | SSSE3 + SSE4.1 |
//! | SA | + SSE4.2 |
//! | SU | + SSE4.2 + AES-NI |
//!
//! Selection happens once per process. See [`DispatchInfo`] for what was chosen.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Without `std` only compile-time target
//! features count as detected:
//!
//! ```toml
//! [dependencies]
//! farmhash = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod hashers;
mod kernels;
mod mix;
mod util;
mod value;

pub mod config;
mod dispatch;
pub mod family;
pub mod introspect;

#[cfg(feature = "diag")]
pub mod diag;

pub use family::{FamilyId, UnsupportedError};
pub use hashers::{Fingerprint32, Fingerprint64, Fingerprint128, Hash32, Hash64, Hash128};
pub use introspect::{DispatchInfo, KernelIntrospect};
pub use traits::{FastHash, StableHash};
pub use value::Value128;

// ─────────────────────────────────────────────────────────────────────────────
// Debug tweak
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
const fn debug_tweak32(x: u32) -> u32 {
  if config::DEBUG_TWEAK { mix::tweak32(x) } else { x }
}

#[inline(always)]
const fn debug_tweak64(x: u64) -> u64 {
  if config::DEBUG_TWEAK { mix::tweak64(x) } else { x }
}

#[inline(always)]
const fn debug_tweak128(x: Value128) -> Value128 {
  if config::DEBUG_TWEAK { mix::tweak128(x) } else { x }
}

// ─────────────────────────────────────────────────────────────────────────────
// General-purpose hashing
// ─────────────────────────────────────────────────────────────────────────────

/// Hash to the platform word size: [`hash64`] on 64-bit targets, [`hash32`]
/// otherwise.
#[inline]
#[must_use]
pub fn hash(data: &[u8]) -> usize {
  #[cfg(target_pointer_width = "64")]
  {
    hash64(data) as usize
  }
  #[cfg(not(target_pointer_width = "64"))]
  {
    hash32(data) as usize
  }
}

/// 32-bit hash with the best available family.
#[inline]
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  debug_tweak32((dispatch::active().hash32.func)(data))
}

#[inline]
#[must_use]
pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
  debug_tweak32((dispatch::active().hash32_with_seed.func)(data, seed))
}

/// 64-bit hash with the best available family.
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  debug_tweak64((dispatch::active().hash64.func)(data))
}

/// Seeded 64-bit hash. Always NA.
#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  debug_tweak64(family::na::hash64_with_seed(data, seed))
}

/// Two-seed 64-bit hash. Always NA.
#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  debug_tweak64(family::na::hash64_with_seeds(data, seed0, seed1))
}

#[inline]
#[must_use]
pub fn hash128(data: &[u8]) -> Value128 {
  debug_tweak128(family::cc::fingerprint128(data))
}

#[inline]
#[must_use]
pub fn hash128_with_seed(data: &[u8], seed: Value128) -> Value128 {
  debug_tweak128(family::cc::hash128_with_seed(data, seed))
}

// ─────────────────────────────────────────────────────────────────────────────
// Fingerprints (frozen)
// ─────────────────────────────────────────────────────────────────────────────

/// Stable 32-bit fingerprint. Never changes across platforms or versions.
#[inline]
#[must_use]
pub fn fingerprint32(data: &[u8]) -> u32 {
  family::mk::hash32(data)
}

/// Stable 64-bit fingerprint. Never changes across platforms or versions.
#[inline]
#[must_use]
pub fn fingerprint64(data: &[u8]) -> u64 {
  family::na::hash64(data)
}

/// Stable 128-bit fingerprint. Never changes across platforms or versions.
#[inline]
#[must_use]
pub fn fingerprint128(data: &[u8]) -> Value128 {
  family::cc::fingerprint128(data)
}

/// Stable fingerprint of a 128-bit value.
#[inline]
#[must_use]
pub const fn fingerprint_u128(v: Value128) -> u64 {
  mix::fingerprint128_to_64(v)
}

/// Stable fingerprint of a 64-bit integer.
///
/// ```
/// assert_eq!(farmhash::fingerprint_u64(42), 0x00ff_da76_068f_1108);
/// ```
#[inline]
#[must_use]
pub const fn fingerprint_u64(x: u64) -> u64 {
  fingerprint_u128(Value128::new(x, 0))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn general_purpose_outputs_carry_the_tweak() {
    let data = b"general purpose";
    let active = dispatch::active();
    assert_eq!(hash64(data), debug_tweak64((active.hash64.func)(data)));
    assert_eq!(hash32(data), debug_tweak32((active.hash32.func)(data)));
    assert_eq!(hash64_with_seed(data, 7), debug_tweak64(family::na::hash64_with_seed(data, 7)));
    assert_eq!(hash128(data), debug_tweak128(fingerprint128(data)));
  }

  #[test]
  fn tweak_is_identity_when_disabled() {
    if config::DEBUG_TWEAK {
      assert_ne!(debug_tweak64(1), 1);
      assert_eq!(debug_tweak64(1), mix::tweak64(1));
    } else {
      assert_eq!(debug_tweak64(1), 1);
      assert_eq!(debug_tweak32(1), 1);
      assert_eq!(debug_tweak128(Value128::new(1, 2)), Value128::new(1, 2));
    }
  }

  #[test]
  fn hash_follows_pointer_width() {
    let data = b"word sized";
    #[cfg(target_pointer_width = "64")]
    assert_eq!(hash(data) as u64, hash64(data));
    #[cfg(not(target_pointer_width = "64"))]
    assert_eq!(hash(data) as u32, hash32(data));
  }

  #[test]
  fn fingerprints_ignore_dispatch() {
    assert_eq!(fingerprint32(b""), 0xdc56_d17a);
    assert_eq!(fingerprint64(b""), mix::K2);
    assert_eq!(fingerprint_u64(42), fingerprint_u128(Value128::new(42, 0)));
  }
}
