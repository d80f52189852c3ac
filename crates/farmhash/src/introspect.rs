//! Dispatch introspection.
//!
//! Reports which family serves each general-purpose entrypoint, and which
//! kernel a given input length reaches, without touching the hot path.
//!
//! # Examples
//!
//! ```
//! use farmhash::{DispatchInfo, Hash64, KernelIntrospect, introspect};
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//!
//! println!("hash64 family: {}", Hash64::backend_name());
//! println!("hash64 @ 4KB: {}", introspect::hash64_kernel(4096));
//! ```

use core::fmt;

use platform::{Arch, Caps};

use crate::{
  config::{self, Force},
  dispatch,
  family::FamilyId,
  family::te::LONG_THRESHOLD,
};

/// Snapshot of the process-wide dispatch configuration.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DispatchInfo {
  arch: Arch,
  detected: Caps,
  assumed: Caps,
  force: Force,
  hash32: FamilyId,
  hash64: FamilyId,
  debug_tweak: bool,
}

impl DispatchInfo {
  /// Dispatch info for the running process. Cached after the first call.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    let active = dispatch::active();
    let cfg = config::get();
    Self {
      arch: Arch::current(),
      detected: platform::caps(),
      assumed: cfg.assumed,
      force: cfg.force,
      hash32: active.family32(),
      hash64: active.family64(),
      debug_tweak: cfg.debug_tweak,
    }
  }

  #[inline]
  #[must_use]
  pub const fn arch(&self) -> Arch {
    self.arch
  }

  /// Capabilities reported by detection (or an active override).
  #[inline]
  #[must_use]
  pub const fn detected(&self) -> Caps {
    self.detected
  }

  /// Capabilities promised by `assume-*` build features.
  #[inline]
  #[must_use]
  pub const fn assumed(&self) -> Caps {
    self.assumed
  }

  #[inline]
  #[must_use]
  pub const fn force(&self) -> Force {
    self.force
  }

  /// Family behind `hash32` and `hash32_with_seed`.
  #[inline]
  #[must_use]
  pub const fn hash32_family(&self) -> FamilyId {
    self.hash32
  }

  /// Family behind `hash64`.
  #[inline]
  #[must_use]
  pub const fn hash64_family(&self) -> FamilyId {
    self.hash64
  }

  #[inline]
  #[must_use]
  pub const fn debug_tweak(&self) -> bool {
    self.debug_tweak
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} hash32={} hash64={} force={}",
      self.arch,
      self.detected,
      self.hash32,
      self.hash64,
      self.force.as_str()
    )?;
    if !self.assumed.is_empty() {
      write!(f, " assumed={}", self.assumed)?;
    }
    if self.debug_tweak {
      f.write_str(" debug-tweak")?;
    }
    Ok(())
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("arch", &self.arch)
      .field("detected", &self.detected)
      .field("assumed", &self.assumed)
      .field("force", &self.force)
      .field("hash32", &self.hash32)
      .field("hash64", &self.hash64)
      .field("debug_tweak", &self.debug_tweak)
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-length kernel names
// ─────────────────────────────────────────────────────────────────────────────

/// Kernel name `family` reaches for a `len`-byte input.
#[must_use]
pub fn kernel_name(family: FamilyId, len: usize) -> &'static str {
  match family {
    FamilyId::Te if len >= LONG_THRESHOLD => "te/x86_64-sse41",
    FamilyId::Te | FamilyId::Xo => "xo",
    FamilyId::Nt if len >= LONG_THRESHOLD => "nt/x86_64-sse41",
    FamilyId::Nt => "nt/xo",
    FamilyId::Su | FamilyId::Sa | FamilyId::Mk if len <= 24 => "mk",
    FamilyId::Su if len < 40 => "su/crc32c",
    FamilyId::Su => "su/x86_64-sse42-aes",
    FamilyId::Sa if len < 40 => "sa/crc32c",
    FamilyId::Sa => "sa/x86_64-sse42",
    FamilyId::Mk => "mk",
    FamilyId::Na if len <= 64 => "na/short",
    FamilyId::Na => "na",
    FamilyId::Uo if len <= 64 => "na/short",
    FamilyId::Uo => "uo",
    FamilyId::Cc => "cc",
  }
}

/// Kernel `hash32` reaches for a `len`-byte input.
#[inline]
#[must_use]
pub fn hash32_kernel(len: usize) -> &'static str {
  kernel_name(dispatch::active().family32(), len)
}

/// Kernel `hash64` reaches for a `len`-byte input.
#[inline]
#[must_use]
pub fn hash64_kernel(len: usize) -> &'static str {
  kernel_name(dispatch::active().family64(), len)
}

/// Returns the kernel name selected for `T` and a buffer of `len` bytes.
#[inline]
#[must_use]
pub fn kernel_for<T: KernelIntrospect>(len: usize) -> &'static str {
  T::kernel_name_for_len(len)
}

/// Types whose kernel selection can be inspected.
pub trait KernelIntrospect {
  /// Kernel name for a buffer of `len` bytes, e.g. `"te/x86_64-sse41"` or `"mk"`.
  fn kernel_name_for_len(len: usize) -> &'static str;

  /// Family serving this type.
  fn backend_name() -> &'static str;
}
