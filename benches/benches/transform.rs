// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use easel_transform::{AsyTransform, Transform, TransformInput};
use kurbo::{Point, Vec2};

fn chain(len: usize) -> Vec<Transform> {
    (0..len)
        .map(|i| {
            let f = i as f64;
            match i % 3 {
                0 => Transform::translate(Vec2::new(f, -f * 0.5)),
                1 => Transform::rotate_about(f * 0.01, Point::new(f, f)),
                _ => Transform::scale_about(1.0 + f * 1e-3, 1.0 - f * 1e-4, Point::ZERO),
            }
        })
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/compose");
    for len in [16_usize, 256, 4_096] {
        let transforms = chain(len);
        group.bench_function(format!("fold(n={len})"), |b| {
            b.iter(|| {
                let t = transforms
                    .iter()
                    .fold(Transform::IDENTITY, |acc, t| acc.then(*t));
                black_box(t);
            });
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/inverse");
    let transforms = chain(1_024);

    group.bench_function("try_inverse", |b| {
        b.iter(|| {
            for t in &transforms {
                let _ = black_box(t.try_inverse());
            }
        });
    });

    group.bench_function("resolve_asy", |b| {
        let inputs: Vec<TransformInput> = transforms
            .iter()
            .map(|t| TransformInput::Asy(AsyTransform::from(*t)))
            .collect();
        b.iter(|| {
            for input in &inputs {
                let _ = black_box(input.resolve());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compose, bench_inverse);
criterion_main!(benches);
