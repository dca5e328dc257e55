// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_canvas::DrawableObject;
use easel_editor::{Editor, EditorSettings};
use kurbo::{Point, Rect};

/// An editor with one square and `commits` recorded drags of it.
///
/// Each drag starts where the previous one left the square, so every press hits.
fn edited(commits: usize) -> Editor<Rect> {
    let mut editor = Editor::new(EditorSettings::default());
    editor.load_object(DrawableObject::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
    let mut at = Point::new(5.0, 5.0);
    for _ in 0..commits {
        let to = Point::new(at.x + 3.0, at.y + 1.0);
        editor.on_press(at);
        editor.on_move(to);
        let _ = editor.on_release(to);
        at = to;
    }
    editor
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/replay");
    for commits in [64_usize, 1_024] {
        group.bench_function(format!("undo_redo_all(n={commits})"), |b| {
            b.iter_batched(
                || edited(commits),
                |mut editor| {
                    while editor.undo().unwrap_or(false) {}
                    while editor.redo().unwrap_or(false) {}
                    black_box(editor);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_commit(c: &mut Criterion) {
    c.bench_function("history/commit_drag", |b| {
        b.iter_batched(
            || edited(0),
            |mut editor| {
                editor.on_press(Point::new(5.0, 5.0));
                for step in 1..=16 {
                    editor.on_move(Point::new(5.0 + f64::from(step), 5.0));
                }
                black_box(editor.on_release(Point::new(21.0, 5.0)))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_replay, bench_commit);
criterion_main!(benches);
