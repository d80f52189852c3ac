//! Kernel selection.
//!
//! - [`Candidate`]: a kernel with capability requirements
//! - [`select`]: choose the first candidate the capabilities allow and return it
//!
//! Algorithm crates register kernels as an ordered list, best first, and cache
//! the outcome in a [`OnceCache`](crate::OnceCache):
//!
//! ```
//! use backend::{candidates, dispatch::{Candidate, select}};
//! use platform::caps::{Caps, x86};
//!
//! type LenFn = fn(&[u8]) -> u64;
//!
//! fn fast(data: &[u8]) -> u64 { data.len() as u64 }
//! fn portable(data: &[u8]) -> u64 { data.len() as u64 }
//!
//! let chosen: Candidate<LenFn> = select(
//!   platform::caps(),
//!   candidates![
//!     "x86_64/sse4.1" => x86::SHUFFLE_MUL_READY => fast as LenFn,
//!     "portable"      => Caps::NONE             => portable as LenFn,
//!   ],
//! );
//! assert_eq!((chosen.func)(b"abc"), 3);
//! ```

use platform::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Core Types
// ─────────────────────────────────────────────────────────────────────────────

/// A candidate kernel with capability requirements.
///
/// Candidates are ordered from best to worst.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "te/x86_64-sse41").
  pub name: &'static str,
  /// Required CPU capabilities. Must be a subset of the selection caps.
  pub requires: Caps,
  /// The kernel function pointer.
  pub func: F,
}

impl<F> Candidate<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, func: F) -> Self {
    Self { name, requires, func }
  }
}

/// Select the first candidate whose `requires` is satisfied by `caps`.
///
/// Returns `None` when nothing matches.
#[inline]
#[must_use]
pub fn try_select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Option<Candidate<F>> {
  candidates.iter().find(|c| caps.has(c.requires)).copied()
}

/// Select the best kernel from a candidate list.
///
/// # Panics
///
/// Panics if no candidate matches. The last candidate should always require
/// `Caps::NONE`.
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Candidate<F> {
  match try_select(caps, candidates) {
    Some(selected) => selected,
    None => panic!("no matching kernel for {caps}; candidate list must end with a portable fallback"),
  }
}

/// Build a `&[Candidate<_>]` from `name => requires => func` rows.
#[macro_export]
macro_rules! candidates {
  ($($name:expr => $requires:expr => $func:expr),+ $(,)?) => {
    &[$($crate::dispatch::Candidate::new($name, $requires, $func)),+]
  };
}
