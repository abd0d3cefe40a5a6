// File: crates/chart-core/benches/lttb_bench.rs
// Purpose: LTTB downsampling cost over long price lines.

use chart_core::downsample::lttb;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    // roughly 40 years of trading days, day numbers as x
    (0..n)
        .map(|i| (730_000.0 + i as f64, (i as f64 * 0.01).sin() * 10.0 + 50.0 + i as f64 * 0.002))
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[2_500usize, 10_000usize] {
        let data = gen_xy(n);
        for &target in &[500usize, 2_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_t{target}")), &target, |b, &t| {
                b.iter_batched(|| data.clone(), |d| black_box(lttb(&d, t)), BatchSize::SmallInput);
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lttb);
criterion_main!(benches);
