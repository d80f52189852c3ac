//! FarmHash throughput benchmarks.
//!
//! Run: `cargo bench -p farmhash`
//!
//! Dispatched entrypoints are labelled with the kernel they reach; pinned
//! families are benchmarked directly when the CPU can run them.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use farmhash::{
  KernelIntrospect,
  family::{cc, mk, na, nt, sa, su, te, uo, xo},
  introspect,
};

const CASES: &[(&str, usize)] = &[
  ("xxs", 8),
  ("xs", 32),
  ("s", 64),
  ("m", 256),
  ("l", 4 * 1024),
  ("xl", 64 * 1024),
];

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn bench_dispatched(c: &mut Criterion) {
  let mut group = c.benchmark_group("farmhash/dispatched");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    let kernel = introspect::hash64_kernel(size);
    group.bench_with_input(BenchmarkId::new(format!("hash64/{kernel}"), label), &data, |b, data| {
      b.iter(|| black_box(farmhash::hash64(black_box(data))));
    });

    let kernel = introspect::hash32_kernel(size);
    group.bench_with_input(BenchmarkId::new(format!("hash32/{kernel}"), label), &data, |b, data| {
      b.iter(|| black_box(farmhash::hash32(black_box(data))));
    });

    let kernel = farmhash::Hash128::kernel_name_for_len(size);
    group.bench_with_input(BenchmarkId::new(format!("hash128/{kernel}"), label), &data, |b, data| {
      b.iter(|| black_box(farmhash::hash128(black_box(data))));
    });
  }
  group.finish();
}

fn bench_families64(c: &mut Criterion) {
  let mut group = c.benchmark_group("farmhash/family64");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("na", label), &data, |b, data| {
      b.iter(|| black_box(na::hash64(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("uo", label), &data, |b, data| {
      b.iter(|| black_box(uo::hash64(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("xo", label), &data, |b, data| {
      b.iter(|| black_box(xo::hash64(black_box(data))));
    });
    if te::is_available() {
      group.bench_with_input(BenchmarkId::new("te", label), &data, |b, data| {
        b.iter(|| black_box(te::hash64(black_box(data))));
      });
    }
  }
  group.finish();
}

fn bench_families32(c: &mut Criterion) {
  let mut group = c.benchmark_group("farmhash/family32");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("mk", label), &data, |b, data| {
      b.iter(|| black_box(mk::hash32(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("cc", label), &data, |b, data| {
      b.iter(|| black_box(cc::hash32(black_box(data))));
    });
    if nt::is_available() {
      group.bench_with_input(BenchmarkId::new("nt", label), &data, |b, data| {
        b.iter(|| black_box(nt::hash32(black_box(data))));
      });
    }
    if sa::is_available() {
      group.bench_with_input(BenchmarkId::new("sa", label), &data, |b, data| {
        b.iter(|| black_box(sa::hash32(black_box(data))));
      });
    }
    if su::is_available() {
      group.bench_with_input(BenchmarkId::new("su", label), &data, |b, data| {
        b.iter(|| black_box(su::hash32(black_box(data))));
      });
    }
  }
  group.finish();
}

fn bench_fingerprints(c: &mut Criterion) {
  let mut group = c.benchmark_group("farmhash/fingerprint");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("fp32", label), &data, |b, data| {
      b.iter(|| black_box(farmhash::fingerprint32(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("fp64", label), &data, |b, data| {
      b.iter(|| black_box(farmhash::fingerprint64(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::new("fp128", label), &data, |b, data| {
      b.iter(|| black_box(farmhash::fingerprint128(black_box(data))));
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_dispatched,
  bench_families64,
  bench_families32,
  bench_fingerprints,
);
criterion_main!(benches);
