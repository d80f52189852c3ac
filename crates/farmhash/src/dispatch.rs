//! Family selection for the general-purpose entrypoints.
//!
//! Selection runs once per process against detected plus assumed capabilities
//! (see [`crate::config`]) and is cached in a [`backend::OnceCache`]. Fingerprints
//! never go through here.

use backend::{Candidate, OnceCache, candidates, select};
use platform::{Caps, caps::x86};

use crate::{
  config::{self, Force},
  family::{FamilyId, mk, nt, sa, su, te, xo},
};

pub(crate) type Hash32Fn = fn(&[u8]) -> u32;
pub(crate) type Hash32SeedFn = fn(&[u8], u32) -> u32;
pub(crate) type Hash64Fn = fn(&[u8]) -> u64;

/// The families serving `hash32*` and `hash64`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ActiveDispatch {
  pub(crate) hash32: Candidate<Hash32Fn>,
  pub(crate) hash32_with_seed: Candidate<Hash32SeedFn>,
  pub(crate) hash64: Candidate<Hash64Fn>,
}

impl ActiveDispatch {
  #[inline]
  pub(crate) fn family32(&self) -> FamilyId {
    family_named(self.hash32.name)
  }

  #[inline]
  pub(crate) fn family64(&self) -> FamilyId {
    family_named(self.hash64.name)
  }
}

fn family_named(name: &str) -> FamilyId {
  FamilyId::ALL
    .into_iter()
    .find(|id| id.as_str() == name)
    .unwrap_or(FamilyId::Mk)
}

static ACTIVE: OnceCache<ActiveDispatch> = OnceCache::new();

/// The cached selection for this process.
#[inline]
pub(crate) fn active() -> ActiveDispatch {
  ACTIVE.get_or_init(|| select_for(config::selection_caps(), config::get().force))
}

/// Pure selection: best family first, portable last.
pub(crate) fn select_for(caps: Caps, force: Force) -> ActiveDispatch {
  let caps = match force {
    Force::Auto => caps,
    Force::Portable => Caps::NONE,
  };
  ActiveDispatch {
    hash32: select(
      caps,
      candidates![
        "nt" => x86::SHUFFLE_MUL_READY => nt::hash32 as Hash32Fn,
        "su" => x86::CRC32C_AES_READY  => su::hash32 as Hash32Fn,
        "sa" => x86::CRC32C_READY      => sa::hash32 as Hash32Fn,
        "mk" => Caps::NONE             => mk::hash32 as Hash32Fn,
      ],
    ),
    hash32_with_seed: select(
      caps,
      candidates![
        "nt" => x86::SHUFFLE_MUL_READY => nt::hash32_with_seed as Hash32SeedFn,
        "su" => x86::CRC32C_AES_READY  => su::hash32_with_seed as Hash32SeedFn,
        "sa" => x86::CRC32C_READY      => sa::hash32_with_seed as Hash32SeedFn,
        "mk" => Caps::NONE             => mk::hash32_with_seed as Hash32SeedFn,
      ],
    ),
    hash64: select(
      caps,
      candidates![
        "te" => x86::SHUFFLE_MUL_READY => te::hash64 as Hash64Fn,
        "xo" => Caps::NONE             => xo::hash64 as Hash64Fn,
      ],
    ),
  }
}
