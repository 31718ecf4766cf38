//! Benchmarks for placement computation
//!
//! Performance budgets:
//! - Single placement (any fallback path): < 50ns
//! - Input validation (well-formed scene): < 200ns
//!
//! Run with: cargo bench -p corbel --bench placement_bench

use corbel::{
    Placement, PlacementOptions, Rect, Viewport, compute_placement, validate_inputs,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Horizontal paths: comfortable, fallback, forced
// =============================================================================

fn bench_horizontal_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/horizontal");

    let scenes = [
        (
            "comfortable_right",
            Rect::new(100.0, 100.0, 50.0, 20.0),
            Viewport::new(1200.0, 800.0),
        ),
        (
            "fallback_left",
            Rect::new(900.0, 100.0, 50.0, 20.0),
            Viewport::new(1200.0, 800.0),
        ),
        (
            "forced_fit",
            Rect::new(100.0, 100.0, 200.0, 20.0),
            Viewport::new(500.0, 800.0),
        ),
    ];

    for (name, anchor, viewport) in scenes {
        group.bench_with_input(
            BenchmarkId::new("compute", name),
            &(anchor, viewport),
            |b, &(anchor, viewport)| {
                b.iter(|| {
                    black_box(compute_placement(
                        black_box(anchor),
                        black_box(viewport),
                        PlacementOptions::default(),
                    ))
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Vertical paths: centering and flip
// =============================================================================

fn bench_vertical_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/vertical");
    let options = PlacementOptions::new()
        .panel_height(200.0)
        .preferred(Placement::Bottom);

    let scenes = [
        ("bottom_centered", Rect::new(500.0, 300.0, 100.0, 30.0)),
        ("flip_above", Rect::new(500.0, 600.0, 100.0, 30.0)),
    ];

    for (name, anchor) in scenes {
        group.bench_with_input(
            BenchmarkId::new("compute", name),
            &anchor,
            |b, &anchor| {
                b.iter(|| {
                    black_box(compute_placement(
                        black_box(anchor),
                        black_box(Viewport::new(1200.0, 800.0)),
                        options,
                    ))
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Input validation
// =============================================================================

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/validate");

    let anchor = Rect::new(100.0, 100.0, 50.0, 20.0);
    let viewport = Viewport::new(1200.0, 800.0);
    let options = PlacementOptions::default();

    group.bench_function("well_formed", |b| {
        b.iter(|| {
            black_box(
                validate_inputs(black_box(anchor), black_box(viewport), black_box(&options))
                    .is_ok(),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_horizontal_paths,
    bench_vertical_paths,
    bench_validate,
);
criterion_main!(benches);
