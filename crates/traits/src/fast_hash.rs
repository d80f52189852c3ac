//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// Suitable for hash tables, sharding and other non-adversarial settings. Not
/// suitable for MACs, signatures or inputs where collision attacks matter.
///
/// One-shot only: there is no streaming state.
pub trait FastHash {
  /// Short algorithm name for diagnostics.
  const NAME: &'static str;

  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type. `()` for unseeded algorithms.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` without a caller seed.
  ///
  /// Algorithms whose unseeded form differs from "seed = default" override this.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

/// Marker for hashes whose output is frozen across builds, platforms and versions.
///
/// Values produced by a `StableHash` may be persisted or sent to other processes.
pub trait StableHash: FastHash {}
