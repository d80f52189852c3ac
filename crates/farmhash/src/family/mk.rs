//! MK: the 32-bit Murmur-style baseline family.
//!
//! Always available and never changes: MK backs [`crate::fingerprint32`]. Its
//! short-input kernels also serve SU, SA and CC for inputs up to 24 bytes.

#![allow(clippy::indexing_slicing)] // Byte loop in the 0..=4 bucket

use crate::{
  mix::{C1, C2, fmix, mur},
  util::{fetch32, rotr32},
};

/// `s.len()` must be in `13..=24`.
#[inline]
pub(crate) fn hash32_len_13to24(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  let mut a = fetch32(s, (len >> 1) - 4);
  let b = fetch32(s, 4);
  let c = fetch32(s, len - 8);
  let d = fetch32(s, len >> 1);
  let e = fetch32(s, 0);
  let f = fetch32(s, len - 4);
  let mut h = d.wrapping_mul(C1).wrapping_add(len as u32).wrapping_add(seed);
  a = rotr32(a, 12).wrapping_add(f);
  h = mur(c, h).wrapping_add(a);
  a = rotr32(a, 3).wrapping_add(c);
  h = mur(e, h).wrapping_add(a);
  a = rotr32(a.wrapping_add(f), 12).wrapping_add(d);
  h = mur(b ^ seed, h).wrapping_add(a);
  fmix(h)
}

/// `s.len()` must be at most 4. Bytes are folded as signed values.
#[inline]
pub(crate) fn hash32_len_0to4(s: &[u8], seed: u32) -> u32 {
  let mut b = seed;
  let mut c = 9u32;
  for &byte in s {
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix(mur(b, mur(s.len() as u32, c)))
}

/// `s.len()` must be in `5..=12`.
#[inline]
pub(crate) fn hash32_len_5to12(s: &[u8], seed: u32) -> u32 {
  let len = s.len();
  let mut a = len as u32;
  let mut b = (len as u32).wrapping_mul(5);
  let mut c = 9u32;
  let d = b.wrapping_add(seed);
  a = a.wrapping_add(fetch32(s, 0));
  b = b.wrapping_add(fetch32(s, len - 4));
  c = c.wrapping_add(fetch32(s, (len >> 1) & 4));
  fmix(seed ^ mur(c, mur(b, mur(a, d))))
}

/// Seeded dispatch for inputs of at most 24 bytes, shared by every 32-bit family.
#[inline]
pub(crate) fn hash32_short_with_seed(s: &[u8], seed: u32) -> u32 {
  match s.len() {
    13.. => hash32_len_13to24(s, seed.wrapping_mul(C1)),
    5.. => hash32_len_5to12(s, seed),
    _ => hash32_len_0to4(s, seed),
  }
}

#[inline(always)]
pub(crate) const fn scramble(x: u32) -> u32 {
  rotr32(x.wrapping_mul(C1), 17).wrapping_mul(C2)
}

#[inline(always)]
const fn murmur_step(h: u32, k: u32) -> u32 {
  rotr32(h ^ k, 19).wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// Hash `data` to 32 bits.
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  let len = data.len();
  match len {
    0..=4 => return hash32_len_0to4(data, 0),
    5..=12 => return hash32_len_5to12(data, 0),
    13..=24 => return hash32_len_13to24(data, 0),
    _ => {}
  }

  let s = data;
  let mut h = len as u32;
  let mut g = C1.wrapping_mul(len as u32);
  let mut f = g;
  let a0 = scramble(fetch32(s, len - 4));
  let a1 = scramble(fetch32(s, len - 8));
  let a2 = scramble(fetch32(s, len - 16));
  let a3 = scramble(fetch32(s, len - 12));
  let a4 = scramble(fetch32(s, len - 20));
  h = murmur_step(murmur_step(h, a0), a2);
  g = murmur_step(murmur_step(g, a1), a3);
  f = rotr32(f.wrapping_add(a4), 19).wrapping_add(113);

  let iters = (len - 1) / 20;
  for block in s.chunks_exact(20).take(iters) {
    let a = fetch32(block, 0);
    let b = fetch32(block, 4);
    let c = fetch32(block, 8);
    let d = fetch32(block, 12);
    let e = fetch32(block, 16);
    h = h.wrapping_add(a);
    g = g.wrapping_add(b);
    f = f.wrapping_add(c);
    h = mur(d, h).wrapping_add(e);
    g = mur(c, g).wrapping_add(a);
    f = mur(b.wrapping_add(e.wrapping_mul(C1)), f).wrapping_add(d);
    f = f.wrapping_add(g);
    g = g.wrapping_add(f);
  }
  finish(h, g, f)
}

/// Shared tail of the >24 byte schedules in MK and CC.
#[inline(always)]
pub(crate) const fn finish(mut h: u32, mut g: u32, mut f: u32) -> u32 {
  g = rotr32(g, 11).wrapping_mul(C1);
  g = rotr32(g, 17).wrapping_mul(C1);
  f = rotr32(f, 11).wrapping_mul(C1);
  f = rotr32(f, 17).wrapping_mul(C1);
  h = murmur_step(h.wrapping_add(g), 0);
  h = rotr32(h, 17).wrapping_mul(C1);
  h = murmur_step(h.wrapping_add(f), 0);
  rotr32(h, 17).wrapping_mul(C1)
}

/// Hash `data` with a seed.
#[must_use]
pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
  let len = data.len();
  if len <= 24 {
    return hash32_short_with_seed(data, seed);
  }
  let h = hash32_len_13to24(&data[..24], seed ^ len as u32);
  mur(hash32(&data[24..]).wrapping_add(seed), h)
}
