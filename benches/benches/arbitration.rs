// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use tether_arbiter::arbiter::GestureArbiter;
use tether_arbiter::config::ArbiterConfig;
use tether_arbiter::host::{DragTarget, ScrollSource};
use tether_arbiter::list::UniformList;
use tether_responder::adapter::SheetAdapter;
use tether_responder::router::Router;
use tether_responder::types::{Region, RegionNode};

struct NullSheet;

impl DragTarget for NullSheet {
    fn set_draggable(&mut self, enabled: bool) {
        black_box(enabled);
    }
}

/// A sheet with a header, a list, and `rows` row regions nested in the list.
fn router_with_rows(rows: u32) -> Router {
    let mut r = Router::new();
    r.insert(
        None,
        Region::Sheet,
        RegionNode::new(Rect::new(0.0, 0.0, 400.0, 800.0)),
    );
    r.insert(
        Some(Region::Sheet),
        Region::Content(u32::MAX),
        RegionNode::new(Rect::new(32.0, 32.0, 368.0, 132.0)),
    );
    r.insert(
        Some(Region::Sheet),
        Region::List,
        RegionNode::new(Rect::new(32.0, 152.0, 368.0, 768.0)),
    );
    for i in 0..rows {
        let y = 152.0 + f64::from(i) * 48.0;
        r.insert(
            Some(Region::List),
            Region::Content(i),
            RegionNode::new(Rect::new(32.0, y, 368.0, y + 48.0)),
        );
    }
    r
}

fn bench_route_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_press");
    for rows in [0_u32, 13, 64] {
        let router = router_with_rows(rows);
        group.bench_function(format!("rows_{rows}"), |b| {
            b.iter(|| black_box(router.route_press(black_box(Point::new(100.0, 400.0)))));
        });
    }
    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    const STEPS: u64 = 1_000;
    let mut group = c.benchmark_group("scroll_burst");
    group.throughput(Throughput::Elements(STEPS));
    group.bench_function("arbiter", |b| {
        b.iter_batched(
            || (GestureArbiter::default(), UniformList::new(10_000, 48, 480)),
            |(mut arbiter, mut list)| {
                arbiter.outer_press_down();
                arbiter.inner_press_down(list.scroll_position(), Duration::ZERO);
                for t in 0..STEPS {
                    list.scroll_by(7);
                    let now = Duration::from_millis(t * 8);
                    black_box(arbiter.scroll_position_changed(list.scroll_position(), now));
                    black_box(arbiter.poll(now));
                }
                arbiter
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("adapter", |b| {
        b.iter_batched(
            || {
                let mut a = SheetAdapter::new(ArbiterConfig::default(), router_with_rows(13));
                a.attach(NullSheet, UniformList::new(10_000, 48, 480));
                a
            },
            |mut a| {
                a.pointer_down(Point::new(100.0, 400.0), Duration::ZERO);
                for t in 0..STEPS {
                    if let Some(list) = a.source_mut() {
                        list.scroll_by(7);
                    }
                    let now = Duration::from_millis(t * 8);
                    a.scroll_changed(now);
                    a.advance(now);
                }
                a.pointer_up();
                a
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_route_press, bench_scroll_burst);
criterion_main!(benches);
