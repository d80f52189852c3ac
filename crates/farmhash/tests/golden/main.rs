//! Self-test corpus for every family.
//!
//! A 1 MiB pseudo-random buffer is sampled at 362 `(offset, len)` pairs; each
//! sample emits a fixed schedule of 32-bit words per family (64-bit results as
//! high word then low word). The expected words live in `testdata/selftest/`.

use std::sync::OnceLock;

use farmhash::{
  Value128,
  family::{cc, mk, na, nt, sa, su, te, uo, xo},
};

const DATA_SIZE: usize = 1 << 20;
const TEST_SIZE: usize = 300;
const K0: u64 = 0xc3a5_c85c_97cb_3127;
const C1: u32 = 0xcc9e_2d51;

fn corpus() -> &'static [u8] {
  static DATA: OnceLock<Vec<u8>> = OnceLock::new();
  DATA.get_or_init(|| {
    let mut a: u64 = 9;
    let mut b: u64 = 777;
    (0..DATA_SIZE as u64)
      .map(|i| {
        a = a.wrapping_add(b);
        b = b.wrapping_add(a);
        a = (a ^ (a >> 41)).wrapping_mul(K0);
        b = (b ^ (b >> 41)).wrapping_mul(K0).wrapping_add(i);
        (b >> 37) as u8
      })
      .collect()
  })
}

fn scramble(mut h: u32) -> u32 {
  for _ in 0..3 {
    h = h.wrapping_mul(C1);
    h ^= h >> 17;
  }
  h
}

fn create_seed(offset: usize, salt: i32) -> u32 {
  scramble(scramble(salt as u32).wrapping_add(offset as u32))
}

/// Seeds for one sample, all derived from its offset.
#[derive(Clone, Copy)]
struct Seeds {
  seed: u32,
  seed0: u32,
  seed1: u32,
}

impl Seeds {
  fn at(offset: usize) -> Self {
    Self {
      seed: create_seed(offset, -1),
      seed0: create_seed(offset, 0),
      seed1: create_seed(offset, 1),
    }
  }
}

fn samples() -> Vec<(usize, usize)> {
  let mut out: Vec<_> = (0..TEST_SIZE - 1).map(|i| (i * i, i)).collect();
  let mut i = TEST_SIZE - 1;
  while i < DATA_SIZE {
    out.push((0, i));
    i += i / 7;
  }
  out.push((0, DATA_SIZE));
  out
}

fn expected(text: &str) -> Vec<u32> {
  text
    .split_ascii_whitespace()
    .map(|word| word.parse().unwrap_or_else(|err| panic!("bad vector word {word:?}: {err}")))
    .collect()
}

fn push64(out: &mut Vec<u32>, h: u64) {
  out.push((h >> 32) as u32);
  out.push(h as u32);
}

fn push128(out: &mut Vec<u32>, v: Value128) {
  push64(out, v.low());
  push64(out, v.high());
}

/// Run every sample through `emit` and compare against `vectors`.
fn check_family(name: &str, vectors: &str, emit: impl Fn(&[u8], Seeds, &mut Vec<u32>)) {
  let data = corpus();
  let expected = expected(vectors);
  let samples = samples();
  assert_eq!(expected.len() % samples.len(), 0, "{name}: vector count");
  let per_sample = expected.len() / samples.len();

  let mut words = Vec::with_capacity(per_sample);
  for (i, (&(offset, len), want)) in samples.iter().zip(expected.chunks_exact(per_sample)).enumerate() {
    words.clear();
    emit(&data[offset..offset + len], Seeds::at(offset), &mut words);
    assert_eq!(words, want, "{name}: sample {i} (offset={offset}, len={len})");
  }
}

macro_rules! vectors {
  ($family:literal) => {
    include_str!(concat!("../../testdata/selftest/", $family, ".txt"))
  };
}

#[test]
fn sample_schedule_matches_corpus_layout() {
  let samples = samples();
  assert_eq!(samples.len(), 362);
  assert_eq!(samples.last(), Some(&(0, DATA_SIZE)));
  assert!(samples.iter().all(|&(offset, len)| offset + len <= DATA_SIZE));
  assert_eq!(expected(vectors!("mk")).len(), samples.len() * 2);
}

#[test]
fn na() {
  check_family("na", vectors!("na"), |s, k, out| {
    push64(out, na::hash64_with_seeds(s, k.seed0.into(), k.seed1.into()));
    push64(out, na::hash64_with_seed(s, k.seed.into()));
    push64(out, na::hash64(s));
  });
}

#[test]
fn uo() {
  check_family("uo", vectors!("uo"), |s, k, out| {
    push64(out, uo::hash64_with_seed(s, k.seed.into()));
    push64(out, uo::hash64(s));
  });
}

#[test]
fn xo() {
  check_family("xo", vectors!("xo"), |s, k, out| {
    push64(out, xo::hash64_with_seeds(s, k.seed0.into(), k.seed1.into()));
    push64(out, xo::hash64_with_seed(s, k.seed.into()));
    push64(out, xo::hash64(s));
  });
}

#[test]
fn te() {
  if !te::is_available() {
    return;
  }
  check_family("te", vectors!("te"), |s, k, out| {
    push64(out, te::hash64_with_seeds(s, k.seed0.into(), k.seed1.into()));
    push64(out, te::hash64_with_seed(s, k.seed.into()));
    push64(out, te::hash64(s));
  });
}

#[test]
fn nt() {
  if !nt::is_available() {
    return;
  }
  check_family("nt", vectors!("nt"), |s, k, out| {
    out.push(nt::hash32_with_seed(s, k.seed));
    out.push(nt::hash32(s));
  });
}

#[test]
fn mk() {
  check_family("mk", vectors!("mk"), |s, k, out| {
    out.push(mk::hash32_with_seed(s, k.seed));
    out.push(mk::hash32(s));
  });
}

#[test]
fn su() {
  if !su::is_available() {
    return;
  }
  check_family("su", vectors!("su"), |s, k, out| {
    out.push(su::hash32_with_seed(s, k.seed));
    out.push(su::hash32(s));
  });
}

#[test]
fn sa() {
  if !sa::is_available() {
    return;
  }
  check_family("sa", vectors!("sa"), |s, k, out| {
    out.push(sa::hash32_with_seed(s, k.seed));
    out.push(sa::hash32(s));
  });
}

#[test]
fn cc() {
  check_family("cc", vectors!("cc"), |s, k, out| {
    out.push(cc::hash32_with_seed(s, k.seed));
    out.push(cc::hash32(s));
    push128(out, cc::fingerprint128(s));
    push128(out, cc::hash128_with_seed(s, Value128::new(k.seed0.into(), k.seed1.into())));
  });
}

/// Recorded outputs for the corpus prefix on either side of TE's 512-byte cutover.
struct Edge {
  len: usize,
  te: u64,
  xo: u64,
  te_seed: u64,
  xo_seed: u64,
  te_seeds: u64,
  xo_seeds: u64,
  nt: u32,
}

const EDGES: [Edge; 3] = [
  Edge {
    len: 511,
    te: 0xca93_b5d7_397b_ec13,
    xo: 0xca93_b5d7_397b_ec13,
    te_seed: 0xf9cf_c76f_b0b6_174e,
    xo_seed: 0xf9cf_c76f_b0b6_174e,
    te_seeds: 0x987d_898b_195f_59bb,
    xo_seeds: 0x987d_898b_195f_59bb,
    nt: 0x397b_ec13,
  },
  Edge {
    len: 512,
    te: 0x44ed_e896_72e9_432a,
    xo: 0x3973_a6af_406e_d962,
    te_seed: 0xc3eb_9874_c4fb_a989,
    xo_seed: 0xdb50_2c94_9efb_3909,
    te_seeds: 0x8295_1d97_db62_8e82,
    xo_seeds: 0x181a_8acd_7a4a_3d2f,
    nt: 0x72e9_432a,
  },
  Edge {
    len: 513,
    te: 0x3928_b2b4_69b2_90eb,
    xo: 0xcbff_c632_76f6_02f6,
    te_seed: 0xd06a_7872_f5a0_1d03,
    xo_seed: 0xc8ff_8b52_ad85_b2c8,
    te_seeds: 0xa40a_2987_8650_1415,
    xo_seeds: 0x14e9_3832_d481_6b07,
    nt: 0x69b2_90eb,
  },
];

#[test]
fn te_cutover_edges() {
  let data = corpus();
  let info = farmhash::DispatchInfo::current();
  for edge in &EDGES {
    let s = &data[..edge.len];
    let len = edge.len;

    assert_eq!(xo::hash64(s), edge.xo, "xo len={len}");
    assert_eq!(xo::hash64_with_seed(s, 7), edge.xo_seed, "xo seed len={len}");
    assert_eq!(xo::hash64_with_seeds(s, 7, 9), edge.xo_seeds, "xo seeds len={len}");

    if te::is_available() {
      assert_eq!(te::hash64(s), edge.te, "te len={len}");
      assert_eq!(te::hash64_with_seed(s, 7), edge.te_seed, "te seed len={len}");
      assert_eq!(te::hash64_with_seeds(s, 7, 9), edge.te_seeds, "te seeds len={len}");
    }
    if nt::is_available() {
      assert_eq!(nt::hash32(s), edge.nt, "nt len={len}");
    }

    if !info.debug_tweak() {
      let want = match info.hash64_family() {
        farmhash::FamilyId::Te => edge.te,
        _ => edge.xo,
      };
      assert_eq!(farmhash::hash64(s), want, "dispatched len={len}");
    }
  }
}
