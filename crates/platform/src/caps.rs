//! CPU capability representation.
//!
//! [`Caps`] answers one question: "which instructions may legally run here?"
//! Each bit names one ISA extension. Bits are architecture-specific but the
//! API is uniform, so dispatch code can be written once and compiled everywhere.
//!
//! Only x86_64 features are tracked: every other target runs portable code.
//!
//! # Usage
//!
//! ```
//! use platform::caps::{Caps, x86};
//!
//! let c = platform::caps();
//! if c.has(x86::SSE42 | x86::AESNI) {
//!   // hardware CRC32-C and AES rounds are usable
//! }
//! # let _ = Caps::NONE;
//! ```

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// `Caps` is `Copy`, `Send` and `Sync`; pass it by value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(u64);

impl Caps {
  /// Empty capability set (portable code only).
  pub const NONE: Self = Self(0);

  #[inline]
  pub(crate) const fn from_bits(bits: u64) -> Self {
    Self(bits)
  }

  /// Raw bit word.
  #[inline]
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.0
  }

  /// Create a capability set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Features present in both sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Features in `self` that are absent from `other`.
  ///
  /// `required.missing_from(detected)` lists what a kernel needs but cannot have.
  #[inline]
  #[must_use]
  pub const fn missing_from(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Iterate over the human-readable names of every known feature in the set.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    FEATURE_NAMES
      .iter()
      .filter(move |(cap, _)| self.has(*cap))
      .map(|(_, name)| *name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl fmt::Debug for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Caps(")?;
    fmt::Display::fmt(self, f)?;
    f.write_str(")")
  }
}

impl fmt::Display for Caps {
  /// Writes `[sse2, ssse3, ...]`, or `[]` for the empty set.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, name) in self.names().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      f.write_str(name)?;
    }
    f.write_str("]")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  #[default]
  Other,
}

impl Arch {
  /// Get the architecture for the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else {
      Self::Other
    }
  }

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86_64 Features
// ─────────────────────────────────────────────────────────────────────────────

/// x86_64 CPU features.
pub mod x86 {
  use super::Caps;

  // SSE family
  pub const SSE2: Caps = Caps::bit(0);
  pub const SSSE3: Caps = Caps::bit(1);
  pub const SSE41: Caps = Caps::bit(2);
  pub const SSE42: Caps = Caps::bit(3);

  // Crypto
  pub const AESNI: Caps = Caps::bit(4);

  /// Byte shuffles plus 32-bit lane multiplies (`pshufb`, `pmulld`).
  pub const SHUFFLE_MUL_READY: Caps = SSSE3.union(SSE41);

  /// [`SHUFFLE_MUL_READY`] plus the `crc32` instruction.
  pub const CRC32C_READY: Caps = SHUFFLE_MUL_READY.union(SSE42);

  /// [`CRC32C_READY`] plus AES round instructions.
  pub const CRC32C_AES_READY: Caps = CRC32C_READY.union(AESNI);
}

const FEATURE_NAMES: &[(Caps, &str)] = &[
  (x86::SSE2, "sse2"),
  (x86::SSSE3, "ssse3"),
  (x86::SSE41, "sse4.1"),
  (x86::SSE42, "sse4.2"),
  (x86::AESNI, "aes"),
];
