//! Maze core benchmarks: carving, layout building, and the two per-frame
//! hot paths (sphere-vs-box movement gate, camera safety raycast).
//!
//! The per-frame paths run once per display refresh against every wall in
//! the live set, so they are measured at a few representative maze sizes.
//!
//! Run with: `cargo bench --bench maze_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

use daedal_maze::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate_seeded(black_box(size), black_box(size), 42));
        });
    }
    group.finish();
}

fn bench_build_walls(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let grid = generate_seeded(16, 16, 42);
    c.bench_function("build_walls_16x16", |b| {
        b.iter(|| build_walls(black_box(&grid), &config));
    });
}

fn bench_move_gate(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("move_allowed");
    for size in [4usize, 16] {
        let grid = generate_seeded(size, size, 42);
        let boxes: Vec<Aabb> = build_walls(&grid, &config)
            .iter()
            .map(|w| w.aabb())
            .collect();
        let spawn = entrance_position(&grid, &config);
        group.bench_with_input(BenchmarkId::from_parameter(size), &boxes, |b, boxes| {
            b.iter(|| move_allowed(black_box(spawn), black_box(0.4), boxes));
        });
    }
    group.finish();
}

fn bench_camera_raycast(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let grid = generate_seeded(16, 16, 42);
    let walls = build_walls(&grid, &config);
    let spawn = entrance_position(&grid, &config);
    let offset = Vec3::new(0.0, 5.0, -5.0);
    c.bench_function("chase_position_16x16", |b| {
        b.iter(|| {
            chase_position(
                black_box(spawn),
                black_box(std::f32::consts::PI),
                black_box(offset),
                &walls,
                0.5,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_build_walls,
    bench_move_gate,
    bench_camera_raycast
);
criterion_main!(benches);
