//! [`FastHash`] adapters for the top-level entrypoints.
//!
//! The `Fingerprint*` types are [`StableHash`]; the `Hash*` types are not.

use traits::{FastHash, StableHash};

use crate::{
  FamilyId, Value128, dispatch,
  introspect::{self, KernelIntrospect},
};

/// [`crate::hash32`] and [`crate::hash32_with_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Hash32;

/// [`crate::hash64`] and [`crate::hash64_with_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Hash64;

/// [`crate::hash128`] and [`crate::hash128_with_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Hash128;

/// [`crate::fingerprint32`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint32;

/// [`crate::fingerprint64`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint64;

/// [`crate::fingerprint128`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Fingerprint128;

impl FastHash for Hash32 {
  const NAME: &'static str = "farmhash32";
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  // The unseeded schedule is not "seed = 0".
  #[inline]
  fn hash(data: &[u8]) -> u32 {
    crate::hash32(data)
  }

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    crate::hash32_with_seed(data, seed)
  }
}

impl FastHash for Hash64 {
  const NAME: &'static str = "farmhash64";
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> u64 {
    crate::hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    crate::hash64_with_seed(data, seed)
  }
}

impl FastHash for Hash128 {
  const NAME: &'static str = "farmhash128";
  const OUTPUT_SIZE: usize = 16;
  type Output = Value128;
  type Seed = Value128;

  #[inline]
  fn hash(data: &[u8]) -> Value128 {
    crate::hash128(data)
  }

  #[inline]
  fn hash_with_seed(seed: Value128, data: &[u8]) -> Value128 {
    crate::hash128_with_seed(data, seed)
  }
}

impl FastHash for Fingerprint32 {
  const NAME: &'static str = "fingerprint32";
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> u32 {
    crate::fingerprint32(data)
  }
}

impl FastHash for Fingerprint64 {
  const NAME: &'static str = "fingerprint64";
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> u64 {
    crate::fingerprint64(data)
  }
}

impl FastHash for Fingerprint128 {
  const NAME: &'static str = "fingerprint128";
  const OUTPUT_SIZE: usize = 16;
  type Output = Value128;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> Value128 {
    crate::fingerprint128(data)
  }
}

impl StableHash for Fingerprint32 {}
impl StableHash for Fingerprint64 {}
impl StableHash for Fingerprint128 {}

// ─────────────────────────────────────────────────────────────────────────────
// Introspection
// ─────────────────────────────────────────────────────────────────────────────

impl KernelIntrospect for Hash32 {
  fn kernel_name_for_len(len: usize) -> &'static str {
    introspect::hash32_kernel(len)
  }

  fn backend_name() -> &'static str {
    dispatch::active().hash32.name
  }
}

impl KernelIntrospect for Hash64 {
  fn kernel_name_for_len(len: usize) -> &'static str {
    introspect::hash64_kernel(len)
  }

  fn backend_name() -> &'static str {
    dispatch::active().hash64.name
  }
}

macro_rules! pinned_introspect {
  ($($ty:ty => $family:expr),+ $(,)?) => {$(
    impl KernelIntrospect for $ty {
      fn kernel_name_for_len(len: usize) -> &'static str {
        introspect::kernel_name($family, len)
      }

      fn backend_name() -> &'static str {
        $family.as_str()
      }
    }
  )+};
}

pinned_introspect! {
  Hash128 => FamilyId::Cc,
  Fingerprint32 => FamilyId::Mk,
  Fingerprint64 => FamilyId::Na,
  Fingerprint128 => FamilyId::Cc,
}
