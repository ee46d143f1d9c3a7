//! Criterion benchmarks for the sampling kernel.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use detrand_core::Lcg;

fn bench_next_uniform(c: &mut Criterion) {
    let mut rng = Lcg::new(42).unwrap();
    c.bench_function("next_uniform", |b| {
        b.iter(|| black_box(rng.next_uniform()));
    });
}

fn bench_next_normal(c: &mut Criterion) {
    let mut rng = Lcg::new(42).unwrap();
    c.bench_function("next_standard_normal", |b| {
        b.iter(|| black_box(rng.next_standard_normal()));
    });
}

fn bench_fill_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_normal");
    for size in [1_024usize, 65_536] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("{size}"), |b| {
            let mut rng = Lcg::new(42).unwrap();
            let mut buffer = vec![0.0; size];
            b.iter(|| {
                rng.fill_normal(&mut buffer, 0.0, 1.0).unwrap();
                black_box(buffer.last().copied())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_next_uniform,
    bench_next_normal,
    bench_fill_normal
);
criterion_main!(benches);
