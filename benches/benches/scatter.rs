// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `vitrine_scatter`: card layout and drag tracking.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::{format, vec::Vec};

use kurbo::Point;
use vitrine_project::{Accent, ProjectRecord};
use vitrine_scale::ScaleBreakpoints;
use vitrine_scatter::{ScatterConfig, ScatterView};

fn deck(n: usize) -> Vec<ProjectRecord> {
    (0..n)
        .map(|i| {
            let id = format!("p{i}");
            ProjectRecord::new(id.as_str(), id.as_str(), "Jan 2024 \u{2013} Mar 2024")
                .with_tech_stack(["Rust", "WebAssembly", "WebGPU", "Vite"])
        })
        .collect()
}

fn bench_scatter(c: &mut Criterion) {
    let fallback = Accent::fallback();

    let mut group = c.benchmark_group("scatter/layout");
    for n in [4_usize, 32, 256] {
        let projects = deck(n);
        let mut view = ScatterView::new(ScatterConfig::default(), ScaleBreakpoints::DEFAULT, 1440.0);
        group.bench_with_input(BenchmarkId::new("closed", n), &projects, |b, p| {
            b.iter(|| black_box(view.layout(p, None, &fallback)));
        });
        view.set_open(true);
        // Half the deck carries drag offsets.
        for project in projects.iter().step_by(2) {
            view.pointer_down(&project.id, Point::ZERO);
            view.pointer_move(Point::new(25.0, -10.0));
            view.pointer_up();
        }
        let selected = projects.last().map(|p| p.id.clone());
        group.bench_with_input(BenchmarkId::new("open_dragged", n), &projects, |b, p| {
            b.iter(|| black_box(view.layout(p, selected.as_ref(), &fallback)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("scatter/drag");
    let projects = deck(32);
    group.bench_function("move_burst_120", |b| {
        let mut view = ScatterView::new(ScatterConfig::default(), ScaleBreakpoints::DEFAULT, 1440.0);
        let id = &projects[0].id;
        b.iter(|| {
            view.pointer_down(id, Point::ZERO);
            for step in 0..120 {
                let x = f64::from(step);
                black_box(view.pointer_move(Point::new(x, x * 0.5)));
            }
            black_box(view.pointer_up())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scatter);
criterion_main!(benches);
