// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vantage_keyframes::Keyframes;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyframes/evaluate");

    // Per-frame cost of one curve lookup; curves on cards have 2-4 keyframes.
    let curves = [
        ("offset_2", Keyframes::default_offset()),
        ("opacity_4", Keyframes::default_opacity()),
    ];
    for (name, curve) in &curves {
        group.bench_with_input(BenchmarkId::new("sweep_1k", name), curve, |b, curve| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..1_000_u32 {
                    acc += curve.evaluate(black_box(f64::from(i) / 1_000.0));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
