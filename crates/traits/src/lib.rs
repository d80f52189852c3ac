//! Core hashing traits for the farmhash workspace.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`FastHash`] | One-shot non-cryptographic hashing |
//! | [`StableHash`] | Marker: output is frozen forever (fingerprints) |
//!
//! # Error Types
//!
//! - [`UnsupportedError`] - a capability-gated algorithm cannot run on this CPU
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;

pub use error::UnsupportedError;
pub use fast_hash::{FastHash, StableHash};
