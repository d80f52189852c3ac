//! Fuzz target for determinism.
//!
//! Every entrypoint must give the same answer for the same bytes, wherever the
//! bytes live in memory.

#![no_main]

use farmhash::Value128;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  // Same bytes at an odd address.
  let mut shifted = Vec::with_capacity(data.len() + 1);
  shifted.push(0);
  shifted.extend_from_slice(data);
  let moved = &shifted[1..];

  assert_eq!(farmhash::hash32(data), farmhash::hash32(moved));
  assert_eq!(farmhash::hash32_with_seed(data, 17), farmhash::hash32_with_seed(moved, 17));
  assert_eq!(farmhash::hash64(data), farmhash::hash64(moved));
  assert_eq!(farmhash::hash64_with_seed(data, 17), farmhash::hash64_with_seed(moved, 17));
  assert_eq!(
    farmhash::hash64_with_seeds(data, 17, 19),
    farmhash::hash64_with_seeds(moved, 17, 19)
  );
  assert_eq!(farmhash::hash128(data), farmhash::hash128(moved));
  let seed = Value128::new(17, 19);
  assert_eq!(
    farmhash::hash128_with_seed(data, seed),
    farmhash::hash128_with_seed(moved, seed)
  );
  assert_eq!(farmhash::hash(data), farmhash::hash(moved));
});
