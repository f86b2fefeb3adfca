//! Partition and navigation benchmarks.
//!
//! Pages are rederived on every render, so slicing must stay cheap even for
//! large item lists.
//!
//! Run with: cargo bench --bench partition_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Instant;
use techdeck::model::Item;
use techdeck::state::{Carousel, CarouselSettings, TransitionRequest};
use techdeck::view_state::{page_at, partition};

fn make_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("tech-{i}"), format!("icon-{i}")))
        .collect()
}

/// Full partition vs. single-page slicing at growing list sizes.
fn benchmark_partition_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_scaling");

    for count in [13, 1_000, 100_000] {
        let items = make_items(count);

        group.bench_with_input(BenchmarkId::new("partition", count), &items, |b, items| {
            b.iter(|| partition(black_box(items), black_box(6)).len())
        });

        group.bench_with_input(BenchmarkId::new("page_at", count), &items, |b, items| {
            let last_page = items.len() / 6;
            b.iter(|| page_at(black_box(items), black_box(6), black_box(last_page)).len())
        });
    }

    group.finish();
}

/// One autoplay-sized step through the whole state stack.
fn benchmark_carousel_navigation(c: &mut Criterion) {
    let now = Instant::now();
    let mut carousel = Carousel::new(make_items(10_000), 1280, CarouselSettings::default(), now);

    c.bench_function("carousel_next", |b| {
        b.iter(|| carousel.dispatch(black_box(TransitionRequest::Next), now))
    });

    c.bench_function("carousel_resize_round_trip", |b| {
        b.iter(|| {
            carousel.set_viewport_width(black_box(320), now);
            carousel.set_viewport_width(black_box(1280), now)
        })
    });
}

criterion_group!(
    benches,
    benchmark_partition_scaling,
    benchmark_carousel_navigation
);
criterion_main!(benches);
