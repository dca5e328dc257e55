// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_canvas::{Canvas, DrawableObject};
use easel_transform::Transform;
use kurbo::{Point, Rect};

/// Lays out `n` overlapping, slightly rotated squares on a grid.
fn build_canvas(n: usize) -> Canvas<Rect> {
    let mut canvas = Canvas::new();
    let cols = (n as f64).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f64 * 15.0;
        let y = (i / cols) as f64 * 15.0;
        let object = DrawableObject::new(Rect::new(0.0, 0.0, 20.0, 20.0))
            .with_transform(
                Transform::rotate_about(0.1, Point::new(10.0, 10.0))
                    .then(Transform::translate((x, y).into())),
            )
            .with_draw_order((i % 7) as i32);
        canvas.insert(object);
    }
    canvas
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/hit_test");
    for n in [64_usize, 1_024, 16_384] {
        let canvas = build_canvas(n);
        let probes: Vec<Point> = (0..64)
            .map(|i| Point::new(f64::from(i) * 7.3, f64::from(i) * 3.1))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &canvas, |b, canvas| {
            b.iter(|| {
                for pt in &probes {
                    black_box(canvas.hit_test(*pt));
                }
            });
        });
    }
    group.finish();
}

fn bench_draw_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/draw_list");
    for n in [1_024_usize, 16_384] {
        let canvas = build_canvas(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &canvas, |b, canvas| {
            b.iter(|| black_box(canvas.draw_list()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_draw_list);
criterion_main!(benches);
