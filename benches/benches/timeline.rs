// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `vitrine_timeline`: layout, culling and the reveal loop.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::{format, vec::Vec};

use vitrine_period::MONTH_ABBREVIATIONS;
use vitrine_project::ProjectRecord;
use vitrine_scale::ScaleBreakpoints;
use vitrine_timeline::{
    RevealWindow, TimelineConfig, TimelineLayout, TimelineMeta, TimelineView, Visibility,
    recency_order,
};

/// `n` records with one-to-six month periods spread over 2018..2026, plus
/// one unparseable record in every 50.
fn catalog(n: usize) -> Vec<ProjectRecord> {
    (0..n)
        .map(|i| {
            let id = format!("p{i}");
            let period = if i % 50 == 49 {
                "Ongoing".to_owned()
            } else {
                let start = (i * 7) % 96;
                let end = start + 1 + i % 6;
                format!(
                    "{} {} \u{2013} {} {}",
                    MONTH_ABBREVIATIONS[start % 12],
                    2018 + start / 12,
                    MONTH_ABBREVIATIONS[end % 12],
                    2018 + end / 12,
                )
            };
            ProjectRecord::new(id.as_str(), id.as_str(), period)
        })
        .collect()
}

fn bench_timeline(c: &mut Criterion) {
    let config = TimelineConfig::default();
    let sizes = [4_usize, 64, 1024];

    let mut group = c.benchmark_group("timeline/layout");
    for &n in &sizes {
        let projects = catalog(n);
        group.bench_with_input(BenchmarkId::new("meta", n), &projects, |b, p| {
            b.iter(|| black_box(TimelineMeta::compute(p, &config)));
        });
        group.bench_with_input(BenchmarkId::new("recency_order", n), &projects, |b, p| {
            b.iter(|| black_box(recency_order(p)));
        });
        group.bench_with_input(BenchmarkId::new("compute", n), &projects, |b, p| {
            b.iter(|| black_box(TimelineLayout::compute(p, &config, 4000.0)));
        });
        group.bench_with_input(BenchmarkId::new("set_width", n), &projects, |b, p| {
            let mut layout = TimelineLayout::compute(p, &config, 4000.0);
            let mut width = 4000.0;
            b.iter(|| {
                width = if width == 4000.0 { 4001.0 } else { 4000.0 };
                black_box(layout.set_width(width))
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("timeline/visibility");
    for &n in &sizes {
        let projects = catalog(n);
        let layout = TimelineLayout::compute(&projects, &config, 40_000.0);
        group.bench_with_input(BenchmarkId::new("sweep", n), &layout, |b, layout| {
            let mut vis = Visibility::new();
            let mut scroll = 0.0;
            b.iter(|| {
                scroll = (scroll + 37.0) % 40_000.0;
                let window = RevealWindow::new(scroll, 1280.0, config.reveal_buffer);
                black_box(vis.update(layout.entries(), window))
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("timeline/reveal");
    let projects = catalog(64);
    group.bench_function("full_sweep_60fps", |b| {
        b.iter_batched(
            || {
                let mut view =
                    TimelineView::new(config, ScaleBreakpoints::DEFAULT, 1280.0);
                view.set_projects(&projects, 0.0);
                view
            },
            |mut view| {
                view.activate(0.0);
                let mut now = 0.0;
                while view.is_animating() {
                    now += 1000.0 / 60.0;
                    black_box(view.on_frame(now));
                }
                view
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_timeline);
criterion_main!(benches);
