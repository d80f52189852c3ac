//! CC: CityHash v1.1.1 compatible 32-bit and 128-bit hashing.
//!
//! [`fingerprint128`] backs [`crate::fingerprint128`] and is frozen. The 64-bit
//! functions are NA's.

use crate::{
  family::mk,
  kernels::{hash_len_0to16, weak_hash_len32_at},
  mix::{C1, K0, K1, fmix, hash128_to_64, mur, shift_mix},
  util::{fetch32, fetch64, rotr32, rotr64},
  value::Value128,
};

pub use super::na::{hash64, hash64_with_seed, hash64_with_seeds};

// ─────────────────────────────────────────────────────────────────────────────
// 32-bit
// ─────────────────────────────────────────────────────────────────────────────

fn hash32_len_13to24(s: &[u8]) -> u32 {
  let len = s.len();
  let a = fetch32(s, (len >> 1) - 4);
  let b = fetch32(s, 4);
  let c = fetch32(s, len - 8);
  let d = fetch32(s, len >> 1);
  let e = fetch32(s, 0);
  let f = fetch32(s, len - 4);
  fmix(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, len as u32)))))))
}

#[inline(always)]
const fn step(h: u32, k: u32, r: u32) -> u32 {
  rotr32(h ^ k, r).wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// CityHash32.
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  let len = data.len();
  match len {
    0..=4 => return mk::hash32_len_0to4(data, 0),
    5..=12 => return mk::hash32_len_5to12(data, 0),
    13..=24 => return hash32_len_13to24(data),
    _ => {}
  }

  let s = data;
  let mut h = len as u32;
  let mut g = C1.wrapping_mul(len as u32);
  let mut f = g;
  let a0 = mk::scramble(fetch32(s, len - 4));
  let a1 = mk::scramble(fetch32(s, len - 8));
  let a2 = mk::scramble(fetch32(s, len - 16));
  let a3 = mk::scramble(fetch32(s, len - 12));
  let a4 = mk::scramble(fetch32(s, len - 20));
  h = step(step(h, a0, 19), a2, 19);
  g = step(step(g, a1, 19), a3, 19);
  f = step(f.wrapping_add(a4), 0, 19);

  let iters = (len - 1) / 20;
  for block in s.chunks_exact(20).take(iters) {
    let a0 = mk::scramble(fetch32(block, 0));
    let a1 = fetch32(block, 4);
    let a2 = mk::scramble(fetch32(block, 8));
    let a3 = mk::scramble(fetch32(block, 12));
    let a4 = fetch32(block, 16);
    h = step(h, a0, 18);
    f = rotr32(f.wrapping_add(a1), 19).wrapping_mul(C1);
    g = step(g.wrapping_add(a2), 0, 18);
    h = step(h, a3.wrapping_add(a1), 19);
    g = (g ^ a4).swap_bytes().wrapping_mul(5);
    h = h.wrapping_add(a4.wrapping_mul(5)).swap_bytes();
    f = f.wrapping_add(a0);
    (f, h, g) = (g, f, h);
  }
  mk::finish(h, g, f)
}

/// Seeded CityHash32 variant; shares MK's seeded kernels.
#[must_use]
pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
  let len = data.len();
  if len <= 24 {
    return mk::hash32_short_with_seed(data, seed);
  }
  let (head, tail) = data.split_at(24);
  let h = mk::hash32_len_13to24(head, seed ^ len as u32);
  mur(hash32(tail).wrapping_add(seed), h)
}

// ─────────────────────────────────────────────────────────────────────────────
// 128-bit
// ─────────────────────────────────────────────────────────────────────────────

/// 128-bit hash for inputs shorter than 128 bytes.
fn city_murmur(s: &[u8], seed: Value128) -> Value128 {
  let len = s.len();
  let mut a = seed.low();
  let mut b = seed.high();
  let mut c;
  let mut d;
  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len_0to16(s));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(s, 0) } else { c }));
  } else {
    c = hash128_to_64(fetch64(s, len - 8).wrapping_add(K1), a);
    d = hash128_to_64(b.wrapping_add(len as u64), c.wrapping_add(fetch64(s, len - 16)));
    a = a.wrapping_add(d);
    // 16-byte steps while more than 16 bytes of the original input remain unvisited.
    let mut pos = 0;
    while pos + 16 < len {
      a ^= shift_mix(fetch64(s, pos).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(fetch64(s, pos + 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      pos += 16;
    }
  }
  let a = hash128_to_64(a, c);
  let b = hash128_to_64(d, b);
  Value128::new(a ^ b, hash128_to_64(b, a))
}

#[inline(always)]
fn block64(s: &[u8], pos: usize, x: &mut u64, y: &mut u64, z: &mut u64, v: &mut (u64, u64), w: &mut (u64, u64)) {
  *x = rotr64(x.wrapping_add(*y).wrapping_add(v.0).wrapping_add(fetch64(s, pos + 8)), 37).wrapping_mul(K1);
  *y = rotr64(y.wrapping_add(v.1).wrapping_add(fetch64(s, pos + 48)), 42).wrapping_mul(K1);
  *x ^= w.1;
  *y = y.wrapping_add(v.0).wrapping_add(fetch64(s, pos + 40));
  *z = rotr64(z.wrapping_add(w.0), 33).wrapping_mul(K1);
  *v = weak_hash_len32_at(s, pos, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
  *w = weak_hash_len32_at(s, pos + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, pos + 16)));
  core::mem::swap(z, x);
}

/// CityHash128 with an explicit seed.
#[must_use]
pub fn hash128_with_seed(s: &[u8], seed: Value128) -> Value128 {
  let len = s.len();
  if len < 128 {
    return city_murmur(s, seed);
  }

  let mut x = seed.low();
  let mut y = seed.high();
  let mut z = (len as u64).wrapping_mul(K1);
  let mut v = (0u64, 0u64);
  v.0 = rotr64(y ^ K1, 49).wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  v.1 = rotr64(v.0, 42).wrapping_mul(K1).wrapping_add(fetch64(s, 8));
  let mut w = (
    rotr64(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x),
    rotr64(x.wrapping_add(fetch64(s, 88)), 53).wrapping_mul(K1),
  );

  let mut pos = 0;
  let mut rem = len;
  loop {
    block64(s, pos, &mut x, &mut y, &mut z, &mut v, &mut w);
    block64(s, pos + 64, &mut x, &mut y, &mut z, &mut v, &mut w);
    pos += 128;
    rem -= 128;
    if rem < 128 {
      break;
    }
  }

  x = x.wrapping_add(rotr64(v.0.wrapping_add(z), 49).wrapping_mul(K0));
  y = y.wrapping_mul(K0).wrapping_add(rotr64(w.1, 37));
  z = z.wrapping_mul(K0).wrapping_add(rotr64(w.0, 27));
  w.0 = w.0.wrapping_mul(9);
  v.0 = v.0.wrapping_mul(K0);

  // Up to four 32-byte chunks counted back from the end of the input.
  let mut tail_done = 0;
  while tail_done < rem {
    tail_done += 32;
    let at = pos + rem - tail_done;
    y = rotr64(x.wrapping_add(y), 42).wrapping_mul(K0).wrapping_add(v.1);
    w.0 = w.0.wrapping_add(fetch64(s, at + 16));
    x = x.wrapping_mul(K0).wrapping_add(w.0);
    z = z.wrapping_add(w.1.wrapping_add(fetch64(s, at)));
    w.1 = w.1.wrapping_add(v.0);
    v = weak_hash_len32_at(s, at, v.0.wrapping_add(z), v.1);
    v.0 = v.0.wrapping_mul(K0);
  }

  let x = hash128_to_64(x, v.0);
  let y = hash128_to_64(y.wrapping_add(z), w.0);
  Value128::new(
    hash128_to_64(x.wrapping_add(v.1), w.1).wrapping_add(y),
    hash128_to_64(x.wrapping_add(w.1), y.wrapping_add(v.1)),
  )
}

/// CityHash128; frozen.
#[must_use]
pub fn fingerprint128(s: &[u8]) -> Value128 {
  if s.len() >= 16 {
    let (head, rest) = s.split_at(16);
    let seed = Value128::new(fetch64(head, 0), fetch64(head, 8).wrapping_add(K0));
    hash128_with_seed(rest, seed)
  } else {
    hash128_with_seed(s, Value128::new(K0, K1))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fingerprint128_pinned() {
    assert_eq!(fingerprint128(b""), Value128::new(0x3df0_9dfc_64c0_9a2b, 0x3cb5_40c3_92e5_1e29));
    assert_eq!(fingerprint128(b"abc"), Value128::new(0x3980_b2af_d212_6c04, 0xa085_f090_1302_9e45));
  }

  #[test]
  fn hash32_shares_small_buckets_with_mk() {
    let data: [u8; 12] = core::array::from_fn(|i| i as u8 * 3);
    for len in 0..=12 {
      assert_eq!(hash32(&data[..len]), mk::hash32(&data[..len]));
    }
  }

  #[test]
  fn hash32_has_own_schedule_above_12_bytes() {
    let data = [9u8; 64];
    assert_ne!(hash32(&data[..13]), mk::hash32(&data[..13]));
    assert_ne!(hash32(&data[..64]), mk::hash32(&data[..64]));
  }

  #[test]
  fn seeded_hash32_matches_mk_for_short_inputs() {
    let data = [0xeeu8; 24];
    for len in 0..=24 {
      assert_eq!(hash32_with_seed(&data[..len], 77), mk::hash32_with_seed(&data[..len], 77));
    }
  }

  #[test]
  fn long_and_short_schedules_meet_at_128() {
    let data: [u8; 300] = core::array::from_fn(|i| (i * 13) as u8);
    let seed = Value128::new(1, 2);
    let mut outs = [Value128::default(); 5];
    for (o, len) in outs.iter_mut().zip([127, 128, 129, 160, 300]) {
      *o = hash128_with_seed(&data[..len], seed);
    }
    for (i, a) in outs.iter().enumerate() {
      for b in &outs[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }
}
