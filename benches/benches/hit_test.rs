// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for drop-target classification and hit-testing.
//!
//! Scripts are synthetic: a grid of canvas steps, each with a `Next` slot and
//! one socket per value type, so every category sees a realistic share of
//! the points.

use blockyard_drag::{Candidates, DragConfig, DragController, eligible_targets};
use blockyard_geometry::{Zones, best_overlap};
use blockyard_script::{BlockId, Category, Element, PointKind, Script, ValueType};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};

const COLUMNS: usize = 20;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn zones() -> Zones {
    Zones::new(
        Rect::new(0.0, 0.0, 200.0, 100_000.0),
        Rect::new(200.0, 0.0, 100_000.0, 100_000.0),
    )
}

/// `n` canvas steps in a grid, plus one loose block per category.
fn build_script(n: usize) -> (Script, [BlockId; 2]) {
    let mut script = Script::new(zones());
    for i in 0..n {
        let x = 250.0 + (i % COLUMNS) as f64 * 220.0;
        let y = (i / COLUMNS) as f64 * 60.0;
        let block = script.add_block(Category::Step, Point::new(x, y), Size::new(200.0, 30.0));
        script
            .add_point(block, PointKind::Next, Rect::new(0.0, 30.0, 200.0, 50.0))
            .unwrap();
        for (slot, ty) in [ValueType::Number, ValueType::Boolean, ValueType::String]
            .into_iter()
            .enumerate()
        {
            let left = 40.0 + slot as f64 * 50.0;
            script
                .add_point(block, PointKind::Socket(ty), Rect::new(left, 5.0, left + 40.0, 25.0))
                .unwrap();
        }
    }
    let step = script.add_block(
        Category::Step,
        Point::new(300.0, 50_000.0),
        Size::new(200.0, 30.0),
    );
    let number = script.add_block(
        Category::Number,
        Point::new(600.0, 50_000.0),
        Size::new(40.0, 20.0),
    );
    (script, [step, number])
}

fn bench_best_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_overlap");
    for n in [16_usize, 256, 4096] {
        let mut rng = Lcg(0x5eed);
        let rects: Vec<Rect> = (0..n)
            .map(|_| {
                let x = rng.next_f64() * 2000.0;
                let y = rng.next_f64() * 2000.0;
                Rect::new(x, y, x + 120.0, y + 20.0)
            })
            .collect();
        let probe = Rect::new(900.0, 900.0, 1020.0, 930.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &rects, |b, rects| {
            b.iter(|| black_box(best_overlap(black_box(&probe), rects)));
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("eligible_targets");
    for n in [10_usize, 100, 1000] {
        let (script, [step, number]) = build_script(n);
        group.bench_function(BenchmarkId::new("step", n), |b| {
            b.iter(|| black_box(eligible_targets(&script, step)));
        });
        group.bench_function(BenchmarkId::new("number", n), |b| {
            b.iter(|| black_box(eligible_targets(&script, number)));
        });
        group.bench_function(BenchmarkId::new("capture_number", n), |b| {
            b.iter(|| black_box(Candidates::capture(&script, eligible_targets(&script, number))));
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_tick");
    for n in [10_usize, 100, 1000] {
        let (script, [_, number]) = build_script(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched(
                || {
                    let mut script = script.clone();
                    let config = DragConfig::default().with_hit_test_interval(0);
                    let mut drag = DragController::new(config);
                    drag.init(&script, &Element::Block(number), Point::new(610.0, 50_010.0));
                    drag.move_to(&mut script, &mut (), Point::new(300.0, 20.0), 0).unwrap();
                    (script, drag)
                },
                |(script, mut drag)| black_box(drag.tick(&script, &mut (), 1)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_best_overlap, bench_classify, bench_tick);
criterion_main!(benches);
