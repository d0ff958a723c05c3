// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use vantage_scroll::ScrollTracker;
use vantage_section::{Section, SectionConfig};

fn viewport_at(top: f64) -> Rect {
    Rect::new(0.0, top, 1280.0, top + 800.0)
}

fn bench_tracker_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll/tracker_update");

    for cards in [8_u32, 64, 512] {
        group.throughput(Throughput::Elements(u64::from(cards)));
        group.bench_with_input(BenchmarkId::from_parameter(cards), &cards, |b, &cards| {
            let mut tracker = ScrollTracker::new(viewport_at(0.0));
            for i in 0..cards {
                let top = 350.0 * f64::from(i);
                let _ = tracker.observe(Rect::new(0.0, top, 400.0, top + 300.0));
            }
            let mut top = 0.0;
            b.iter(|| {
                top += 1.0;
                tracker.set_viewport(viewport_at(top));
                let mut n = 0_usize;
                tracker.update_with(|_, p| {
                    n += 1;
                    black_box(p);
                });
                black_box(n)
            });
        });
    }
    group.finish();
}

fn bench_section_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll/section_on_scroll");

    for cards in [8_usize, 64] {
        group.throughput(Throughput::Elements(cards as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cards), &cards, |b, &cards| {
            let mut section = Section::new((0..cards).collect(), &SectionConfig::default());
            let mut top = 0.0;
            for i in 0..cards {
                section.mount_card(i, Rect::new(0.0, top, 400.0, top + 300.0));
                top += 350.0;
            }
            let mut scroll = 0.0;
            b.iter(|| {
                scroll += 1.0;
                black_box(section.on_scroll(viewport_at(scroll)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tracker_update, bench_section_scroll);
criterion_main!(benches);
