//! Criterion benchmarks comparing FFT and naive multiplication.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polyfft_core::multiplier::{FftMultiplier, NaiveMultiplier, PolyMultiplier};

fn poly(len: usize, seed: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 31 + seed) % 19) as f64 - 9.0).collect()
}

fn bench_multipliers(c: &mut Criterion) {
    let fft: Arc<dyn PolyMultiplier> = Arc::new(FftMultiplier::new());
    let naive: Arc<dyn PolyMultiplier> = Arc::new(NaiveMultiplier::new());

    let lens: Vec<usize> = vec![16, 256, 2_048];

    for m in [&fft, &naive] {
        let mut group = c.benchmark_group(m.name().to_string());
        for &len in &lens {
            let a = poly(len, 1);
            let b = poly(len, 7);
            group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
                bench.iter(|| m.multiply(black_box(&a), black_box(&b)).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_multipliers);
criterion_main!(benches);
