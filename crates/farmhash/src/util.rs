#![allow(clippy::indexing_slicing)] // Offsets are derived from the length bucket being hashed

/// Little-endian 32-bit load at `offset`.
#[inline(always)]
pub(crate) fn fetch32(s: &[u8], offset: usize) -> u32 {
  let mut word = [0u8; 4];
  word.copy_from_slice(&s[offset..offset + 4]);
  u32::from_le_bytes(word)
}

/// Little-endian 64-bit load at `offset`.
#[inline(always)]
pub(crate) fn fetch64(s: &[u8], offset: usize) -> u64 {
  let mut word = [0u8; 8];
  word.copy_from_slice(&s[offset..offset + 8]);
  u64::from_le_bytes(word)
}

#[inline(always)]
pub(crate) const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
pub(crate) const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fetch_is_little_endian_and_unaligned() {
    let bytes = [0xffu8, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    assert_eq!(fetch32(&bytes, 1), 0x0403_0201);
    assert_eq!(fetch64(&bytes, 1), 0x0807_0605_0403_0201);
  }

  #[test]
  fn rotate_by_zero_is_identity() {
    assert_eq!(rotr32(0xdead_beef, 0), 0xdead_beef);
    assert_eq!(rotr64(0x0123_4567_89ab_cdef, 0), 0x0123_4567_89ab_cdef);
    assert_eq!(rotr32(1, 1), 0x8000_0000);
    assert_eq!(rotr64(1, 1), 0x8000_0000_0000_0000);
  }

  #[test]
  #[should_panic]
  fn fetch_past_end_panics() {
    let _ = fetch64(&[0u8; 7], 0);
  }
}
