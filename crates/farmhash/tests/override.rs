//! A capability override that claims more than the hardware reports must not
//! unlock gated kernels.
//!
//! Every test installs the same widened override, so the binary sees one
//! consistent value regardless of test ordering.

use farmhash::{
  FamilyId,
  family::{nt, sa, su, te},
};
use platform::{Caps, caps::x86};

fn claim_everything() -> Caps {
  let claimed = x86::CRC32C_AES_READY | x86::SSE2;
  platform::set_caps_override(Some(claimed));
  claimed
}

fn live() -> Caps {
  if cfg!(target_arch = "x86_64") {
    platform::hardware_caps()
  } else {
    Caps::NONE
  }
}

#[test]
fn override_does_not_widen_hardware_caps() {
  let claimed = claim_everything();
  if !cfg!(miri) {
    assert_eq!(platform::caps(), claimed);
  }
  assert!(claimed.has(live()));
}

#[test]
fn try_entrypoints_follow_hardware_not_override() {
  claim_everything();
  let hardware = live();

  let cases: [(FamilyId, bool); 4] = [
    (FamilyId::Te, te::try_hash64(&[7u8; 600]).is_ok()),
    (FamilyId::Nt, nt::try_hash32(&[7u8; 600]).is_ok()),
    (FamilyId::Sa, sa::try_hash32(&[7u8; 64]).is_ok()),
    (FamilyId::Su, su::try_hash32_with_seed(&[7u8; 64], 3).is_ok()),
  ];
  for (id, ok) in cases {
    assert_eq!(ok, hardware.has(id.required_caps()), "{id}");
    assert_eq!(id.is_available(), ok, "{id}");
  }
}

#[test]
fn missing_features_are_measured_against_hardware() {
  claim_everything();
  let hardware = live();

  match su::try_hash32(b"widened override") {
    Ok(_) => assert!(hardware.has(su::required_caps())),
    Err(err) => {
      assert_eq!(err.algorithm(), "su");
      assert_eq!(err.required(), su::required_caps());
      assert_eq!(err.missing(), su::required_caps().missing_from(hardware));
      assert!(!err.missing().is_empty());
    }
  }

  match te::try_hash64_with_seeds(&[1u8; 1024], 1, 2) {
    Ok(_) => assert!(hardware.has(te::required_caps())),
    Err(err) => assert_eq!(err.missing(), te::required_caps().missing_from(hardware)),
  }
}

#[test]
fn panicking_entrypoints_trap_when_hardware_lacks_features() {
  claim_everything();
  let result = std::panic::catch_unwind(|| te::hash64(&[3u8; 2048]));
  if live().has(te::required_caps()) {
    assert_eq!(result.ok(), te::try_hash64(&[3u8; 2048]).ok());
  } else {
    let panic = result.unwrap_err();
    let msg = panic.downcast_ref::<String>().cloned().unwrap_or_default();
    assert!(msg.starts_with("farmhash: te requires"), "{msg}");
  }
}
