// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use scanaxis_mapper::{AxisMapper, FixedSlider};

fn mapper() -> AxisMapper<FixedSlider> {
    let mut m = AxisMapper::new(FixedSlider::new((0, 10_000), 1_920.0).with_groove(8.0..1_912.0));
    m.on_resize(0.0, 1_920.0).unwrap();
    m.zoom_to_fit(-5.0, 5.0).unwrap();
    m
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/convert");
    let m = mapper();
    let (lo, hi) = m.host().bounds;
    group.throughput(Throughput::Elements((hi - lo + 1) as u64));

    group.bench_function("range_roundtrip", |bench| {
        bench.iter(|| {
            for v in lo..=hi {
                black_box(m.real_to_range(m.range_to_real(black_box(v))));
            }
        });
    });
    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/zoom");
    let steps = 1_000;
    group.throughput(Throughput::Elements(steps));

    group.bench_function("zoom_in_out", |bench| {
        bench.iter_batched(
            mapper,
            |mut m| {
                for i in 0..steps {
                    let factor = if i % 2 == 0 { 1.25 } else { 0.9 };
                    m.zoom(factor, 300.0 + (i % 7) as f64 * 100.0).unwrap();
                }
                black_box(m.handle_positions());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("resize", |bench| {
        bench.iter_batched(
            mapper,
            |mut m| {
                let mut width = 1_920.0;
                for i in 0..steps {
                    let next = 800.0 + (i % 13) as f64 * 90.0;
                    m.on_resize(width, next).unwrap();
                    width = next;
                }
                black_box(m.visible_real_range());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_convert, bench_zoom);
criterion_main!(benches);
