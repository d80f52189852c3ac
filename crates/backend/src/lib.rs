//! Dispatch primitives for the farmhash workspace.
//!
//! - **Selection**: ordered [`Candidate`](dispatch::Candidate) lists resolved
//!   against [`platform::Caps`] by [`select`](dispatch::select)
//! - **Caching**: [`OnceCache`] memoizes the outcome for the process lifetime
//!
//! Selection runs once; every later call is one load plus an indirect call.
//!
//! ```
//! use backend::{OnceCache, candidates, dispatch::select};
//! use platform::Caps;
//!
//! type LenFn = fn(&[u8]) -> usize;
//!
//! fn portable(data: &[u8]) -> usize { data.len() }
//!
//! static ACTIVE: OnceCache<LenFn> = OnceCache::new();
//!
//! let f = ACTIVE.get_or_init(|| {
//!   select(platform::caps(), candidates!["portable" => Caps::NONE => portable as LenFn]).func
//! });
//! assert_eq!(f(b"four"), 4);
//! ```
// Fallibility discipline: deny unwrap/expect in production, allow in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod dispatch;

pub use cache::OnceCache;
pub use dispatch::{Candidate, select, try_select};
