//! Fuzz target for cross-family agreement on short inputs.
//!
//! Families that share short-input kernels must agree there byte for byte.

#![no_main]

use arbitrary::Arbitrary;
use farmhash::family::{mk, na, nt, sa, su, te, uo, xo};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed: u64,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  if data.len() <= 64 {
    assert_eq!(uo::hash64(data), na::hash64(data));
    assert_eq!(uo::hash64_with_seed(data, input.seed), na::hash64_with_seed(data, input.seed));
  }
  if data.len() <= 32 {
    assert_eq!(xo::hash64(data), na::hash64(data));
  }
  if data.len() < te::LONG_THRESHOLD && te::is_available() {
    assert_eq!(te::hash64(data), xo::hash64(data));
    assert_eq!(nt::hash32(data), xo::hash64(data) as u32);
  }
  if data.len() <= 24 {
    if sa::is_available() {
      assert_eq!(sa::hash32(data), mk::hash32(data));
    }
    if su::is_available() {
      assert_eq!(su::hash32(data), mk::hash32(data));
    }
  }
});
