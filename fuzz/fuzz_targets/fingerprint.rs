//! Fuzz target pinning fingerprints to their families.

#![no_main]

use farmhash::family::{cc, mk, na};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  assert_eq!(farmhash::fingerprint32(data), mk::hash32(data));
  assert_eq!(farmhash::fingerprint64(data), na::hash64(data));
  assert_eq!(farmhash::fingerprint128(data), cc::fingerprint128(data));

  if let Some(word) = data.first_chunk::<8>() {
    let x = u64::from_le_bytes(*word);
    assert_eq!(farmhash::fingerprint_u64(x), farmhash::fingerprint_u128(farmhash::Value128::new(x, 0)));
  }
});
