//! Benchmarks for per-symbol hard-decision correlation.
//!
//! Run with: cargo bench -p pnsync-core --bench bsync_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use pnsync_core::prelude::*;

fn bench_real_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_binary_sync");

    for code in [
        SequenceLength::N63,
        SequenceLength::N255,
        SequenceLength::N1023,
    ] {
        let n = code.length();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("push", n), &code, |b, &code| {
            let mut sync = RealBinarySync::from_msequence(code);
            let mut k = 0u64;
            b.iter(|| {
                k = k.wrapping_add(1);
                let sym = if k & 1 == 0 { 1.0 } else { -1.0 };
                sync.push(black_box(sym))
            })
        });
    }

    group.finish();
}

fn bench_iq_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("iq_binary_sync");

    for code in [SequenceLength::N63, SequenceLength::N1023] {
        let n = code.length();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("push", n), &code, |b, &code| {
            let mut sync = IqBinarySync::from_msequence(code);
            let mut k = 0u64;
            b.iter(|| {
                k = k.wrapping_add(1);
                let sym = Complex64::new(
                    if k & 1 == 0 { 1.0 } else { -1.0 },
                    if k & 2 == 0 { 1.0 } else { -1.0 },
                );
                sync.push(black_box(sym))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_real_push, bench_iq_push);
criterion_main!(benches);
