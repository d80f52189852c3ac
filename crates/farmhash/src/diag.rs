//! Optional diagnostics for family selection.
//!
//! This module is behind `cfg(feature = "diag")` and explains, for a given
//! input length, which family and kernel a general-purpose entrypoint uses and
//! why.

use platform::Caps;

use crate::{
  config::{self, Force},
  dispatch,
  family::{FamilyId, te::LONG_THRESHOLD},
  introspect::kernel_name,
};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// Input short enough that every family runs its portable short path.
  BelowSmallThreshold,
  /// A forced mode was active.
  Forced,
  /// Below the portable to SIMD transition of the selected family.
  BelowSimdThreshold,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub len: usize,
  pub output_bits: u32,
  pub reason: SelectionReason,
  pub force: Force,
  pub selection_caps: Caps,
  pub family: FamilyId,
  pub family_requires: Caps,
  pub selected_kernel: &'static str,
  pub simd_threshold: usize,
  pub debug_tweak: bool,
}

/// Length at which `family` leaves its portable code, if it ever does.
const fn simd_threshold(family: FamilyId) -> usize {
  match family {
    FamilyId::Te | FamilyId::Nt => LONG_THRESHOLD,
    FamilyId::Su | FamilyId::Sa => 25,
    _ => usize::MAX,
  }
}

fn diagnose(len: usize, output_bits: u32, family: FamilyId, requires: Caps) -> SelectionDiag {
  let cfg = config::get();
  let simd_threshold = simd_threshold(family);
  let reason = if cfg.force != Force::Auto {
    SelectionReason::Forced
  } else if len <= 16 {
    SelectionReason::BelowSmallThreshold
  } else if family.is_gated() && len < simd_threshold {
    SelectionReason::BelowSimdThreshold
  } else {
    SelectionReason::Auto
  };

  SelectionDiag {
    len,
    output_bits,
    reason,
    force: cfg.force,
    selection_caps: config::selection_caps(),
    family,
    family_requires: requires,
    selected_kernel: kernel_name(family, len),
    simd_threshold,
    debug_tweak: cfg.debug_tweak,
  }
}

/// Diagnose `hash32` selection for `len`.
#[inline]
#[must_use]
pub fn hash32(len: usize) -> SelectionDiag {
  let active = dispatch::active();
  diagnose(len, 32, active.family32(), active.hash32.requires)
}

/// Diagnose `hash64` selection for `len`.
#[inline]
#[must_use]
pub fn hash64(len: usize) -> SelectionDiag {
  let active = dispatch::active();
  diagnose(len, 64, active.family64(), active.hash64.requires)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tiny_inputs_report_small_threshold() {
    let d = hash64(3);
    if d.force == Force::Auto {
      assert_eq!(d.reason, SelectionReason::BelowSmallThreshold);
    }
    assert_eq!(d.output_bits, 64);
  }

  #[test]
  fn te_reports_simd_threshold() {
    let d = hash64(4096);
    if d.family == FamilyId::Te {
      assert_eq!(d.selected_kernel, "te/x86_64-sse41");
      assert_eq!(d.simd_threshold, LONG_THRESHOLD);
      assert!(d.selection_caps.has(d.family_requires));
      assert_eq!(hash64(100).reason, SelectionReason::BelowSimdThreshold);
    } else {
      assert_eq!(d.selected_kernel, "xo");
    }
  }

  #[test]
  fn hash32_names_its_family() {
    let d = hash32(64);
    assert_eq!(d.output_bits, 32);
    assert_eq!(d.selected_kernel, kernel_name(d.family, 64));
  }
}
