//! Criterion benchmarks for Palex critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Color: distance metric
//! - Aggregator: full-image frequency counting
//! - Reducer: similarity reduction rounds

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use palex::color::Color;
use palex::frequency::{aggregate, FrequencyEntry};
use palex::ignore::IgnoreList;
use palex::reduce::reduce;
use palex::scan::{scan_plan, ScanMode};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate an image cycling through `colors` distinct colors.
fn make_image(size: u32, colors: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let i = (y * size + x) % colors;
        Rgba([(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255])
    })
}

/// Generate n spread-out palette entries.
fn make_entries(n: usize) -> Vec<FrequencyEntry> {
    (0..n)
        .map(|i| FrequencyEntry {
            color: Color::new(
                (i * 7 % 256) as u8,
                (i * 13 % 256) as u8,
                (i * 29 % 256) as u8,
                255,
            ),
            count: 1,
            percentage: 100.0 / n as f64,
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let a = Color::new(12, 200, 90, 255);
    let b = Color::new(240, 3, 110, 128);

    c.bench_function("color_distance", |bench| {
        bench.iter(|| black_box(a).distance(black_box(b)))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let ignore = IgnoreList::new(vec![Color::new(0, 0, 0, 255)], 0.0);

    for size in [64u32, 128] {
        let img = make_image(size, 24);
        let coords = scan_plan(size, size, ScanMode::Full, None).unwrap();

        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| aggregate(black_box(&img), black_box(&coords), black_box(&ignore)))
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for n in [32usize, 64] {
        let entries = make_entries(n);
        group.bench_with_input(BenchmarkId::new("to_8", n), &entries, |bench, entries| {
            bench.iter(|| reduce(black_box(entries.clone()), 8))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_aggregate, bench_reduce);
criterion_main!(benches);
