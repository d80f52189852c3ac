//! Misconfiguration trap: gated families refuse to run without their features.
//!
//! Every test pins the capability override to "nothing detected" before doing
//! anything else, so the whole binary sees a bare CPU.

use farmhash::{
  FamilyId,
  family::{nt, sa, su, te},
};
use platform::Caps;

fn bare_cpu() {
  platform::set_caps_override(Some(Caps::NONE));
}

#[test]
#[should_panic(expected = "te requires")]
fn te_traps() {
  bare_cpu();
  let _ = te::hash64(b"no sse4.1 here");
}

#[test]
#[should_panic(expected = "te requires")]
fn te_traps_even_below_threshold() {
  bare_cpu();
  let _ = te::hash64_with_seeds(b"", 1, 2);
}

#[test]
#[should_panic(expected = "nt requires")]
fn nt_traps() {
  bare_cpu();
  let _ = nt::hash32_with_seed(b"abc", 7);
}

#[test]
#[should_panic(expected = "sa requires")]
fn sa_traps() {
  bare_cpu();
  let _ = sa::hash32(b"abc");
}

#[test]
#[should_panic(expected = "su requires")]
fn su_traps() {
  bare_cpu();
  let _ = su::hash32_with_seed(&[0u8; 100], 3);
}

#[test]
fn try_entrypoints_report_missing_features() {
  bare_cpu();
  let err = te::try_hash64(b"abc").unwrap_err();
  assert_eq!(err.algorithm(), "te");
  assert_eq!(err.required(), te::required_caps());
  assert_eq!(err.missing(), te::required_caps());

  assert!(nt::try_hash32(b"abc").is_err());
  assert!(sa::try_hash32_with_seed(b"abc", 1).is_err());
  let err = su::try_hash32(b"abc").unwrap_err();
  assert!(err.to_string().starts_with("su requires"), "{err}");
}

#[test]
fn portable_families_still_run() {
  bare_cpu();
  for id in [FamilyId::Na, FamilyId::Uo, FamilyId::Xo, FamilyId::Mk, FamilyId::Cc] {
    assert!(id.is_available(), "{id}");
  }
  assert_eq!(farmhash::fingerprint32(b"abc"), 795_041_479);
}

#[test]
#[cfg(not(feature = "assume-sse41"))]
fn dispatch_falls_back_without_capabilities() {
  bare_cpu();
  let info = farmhash::DispatchInfo::current();
  assert_eq!(info.hash64_family(), FamilyId::Xo);
  assert_eq!(info.hash32_family(), FamilyId::Mk);
  let _ = farmhash::hash64(&[1u8; 1024]);
}

#[test]
#[cfg(all(feature = "assume-sse41", not(feature = "assume-sse42")))]
#[should_panic(expected = "farmhash: te requires")]
fn assumed_capability_that_is_missing_traps() {
  bare_cpu();
  let _ = farmhash::hash64(b"assumed but absent");
}
