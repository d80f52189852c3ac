//! 128-bit hash values.

use core::fmt;

/// A 128-bit hash value held as an ordered `(low, high)` pair of 64-bit words.
///
/// Conversions to and from `u128` are lossless: `low` is bits 0..64.
///
/// ```
/// use farmhash::Value128;
///
/// let v = Value128::new(1, 2);
/// assert_eq!(v.low(), 1);
/// assert_eq!(v.high(), 2);
/// assert_eq!(u128::from(v), (2u128 << 64) | 1);
/// assert_eq!(Value128::from((1u128 << 64) | 7), Value128::new(7, 1));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Value128 {
  // Field order matters for the derived Ord: high word first.
  high: u64,
  low: u64,
}

impl Value128 {
  #[inline]
  #[must_use]
  pub const fn new(low: u64, high: u64) -> Self {
    Self { high, low }
  }

  #[inline]
  #[must_use]
  pub const fn low(self) -> u64 {
    self.low
  }

  #[inline]
  #[must_use]
  pub const fn high(self) -> u64 {
    self.high
  }

  #[inline]
  #[must_use]
  pub const fn to_u128(self) -> u128 {
    ((self.high as u128) << 64) | self.low as u128
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(v: u128) -> Self {
    Self::new(v as u64, (v >> 64) as u64)
  }
}

impl From<u128> for Value128 {
  #[inline]
  fn from(v: u128) -> Self {
    Self::from_u128(v)
  }
}

impl From<Value128> for u128 {
  #[inline]
  fn from(v: Value128) -> Self {
    v.to_u128()
  }
}

impl From<(u64, u64)> for Value128 {
  /// `(low, high)`.
  #[inline]
  fn from((low, high): (u64, u64)) -> Self {
    Self::new(low, high)
  }
}

impl From<Value128> for (u64, u64) {
  #[inline]
  fn from(v: Value128) -> Self {
    (v.low, v.high)
  }
}

impl fmt::Debug for Value128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Value128")
      .field("low", &format_args!("{:#018x}", self.low))
      .field("high", &format_args!("{:#018x}", self.high))
      .finish()
  }
}

impl fmt::LowerHex for Value128 {
  /// Big-endian hex of the full 128-bit value.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.to_u128(), f)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use proptest::prelude::*;

  use super::*;

  #[test]
  fn ordering_compares_high_word_first() {
    assert!(Value128::new(u64::MAX, 0) < Value128::new(0, 1));
    assert!(Value128::new(1, 5) < Value128::new(2, 5));
  }

  #[test]
  fn formatting() {
    let v = Value128::new(0x3980_b2af_d212_6c04, 0xa085_f090_1302_9e45);
    assert_eq!(format!("{v:x}"), "a085f09013029e453980b2afd2126c04");
    assert!(format!("{v:?}").contains("low: 0x3980b2afd2126c04"));
  }

  proptest! {
    #[test]
    fn u128_conversion_is_lossless(v in any::<u128>()) {
      let pair = Value128::from(v);
      prop_assert_eq!(u128::from(pair), v);
      prop_assert_eq!(pair.low(), v as u64);
      prop_assert_eq!(pair.high(), (v >> 64) as u64);
    }

    #[test]
    fn ordering_matches_u128(a in any::<u128>(), b in any::<u128>()) {
      prop_assert_eq!(Value128::from(a).cmp(&Value128::from(b)), a.cmp(&b));
    }
  }
}
