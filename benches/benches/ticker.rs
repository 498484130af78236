// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use scanaxis_ticker::{Ticker, TickerConfig};

/// Intervals that exercise the plain, offset and magnitude label paths.
const INTERVALS: [(&str, f64, f64); 4] = [
    ("unit", 0.0, 1.0),
    ("negative", -3.5e4, 1.2e4),
    ("offset", 1_234_567.891_23, 1_234_567.891_24),
    ("tiny", 1e-9, 1.1e-9),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticker/generate");
    for min_ticks in [3_u32, 10] {
        let ticker = Ticker::new(TickerConfig::default().with_min_ticks(min_ticks)).unwrap();
        for (name, a, b) in INTERVALS {
            group.bench_with_input(
                BenchmarkId::new(name, min_ticks),
                &(a, b),
                |bench, &(a, b)| {
                    bench.iter(|| black_box(ticker.generate(black_box(a), black_box(b))));
                },
            );
        }
    }
    group.finish();
}

fn bench_zoom_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticker/zoom_sweep");

    // One labelling pass per frame while zooming into 1e6 by 1% per frame.
    let frames = 2_000;
    let intervals: Vec<(f64, f64)> = (0..frames)
        .map(|i| {
            let half = 1e3 * 0.99_f64.powi(i);
            (1e6 - half, 1e6 + half)
        })
        .collect();
    group.throughput(Throughput::Elements(frames as u64));

    let ticker = Ticker::default();
    group.bench_function("generate", |bench| {
        bench.iter(|| {
            for &(a, b) in &intervals {
                let _ = black_box(ticker.generate(a, b));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_zoom_sweep);
criterion_main!(benches);
