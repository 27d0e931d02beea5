//! Benchmarks for rastr operations.
//!
//! Run with: `cargo bench -p rastr-bench` (add `--features simd` for the
//! vectorized `f32` paths).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use rastr_core::{BorderMode, Image, ImageDimension, PixelFormat};
use rastr_draw::{LinePixels, Segment, clip_line, draw_line};

/// Benchmark clipping plus drawing of long diagonals.
fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for size in [256u32, 1024, 4096].iter() {
        let mut img = Image::<u8>::new(*size, *size, PixelFormat::Rgb);
        let n = *size as i32;
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("draw_diagonal", size), &n, |b, &n| {
            b.iter(|| draw_line(&mut img, &[255, 0, 0], black_box(-10), 0, n + 10, n))
        });

        group.bench_with_input(BenchmarkId::new("walk", size), &n, |b, &n| {
            b.iter(|| LinePixels::new(0, 0, black_box(n), n / 3).count())
        });
    }

    group.bench_function("clip_mixed", |b| {
        let segs = [
            Segment::new(-500, -20, 900, 700),
            Segment::new(10, 10, 20, 20),
            Segment::new(-5, -5, -1, -100),
            Segment::new(0, 1024, 1024, 0),
        ];
        b.iter(|| {
            segs.iter()
                .filter_map(|&s| clip_line(black_box(s), 512, 512))
                .count()
        })
    });

    group.finish();
}

/// Benchmark per-channel statistics on float images.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for size in [64u32, 512, 2048].iter() {
        let mut gray = Image::<f32>::new(*size, *size, PixelFormat::Gray);
        for (i, v) in gray.data_mut().iter_mut().enumerate() {
            *v = ((i * 31) % 1000) as f32 / 500.0 - 1.0;
        }
        group.throughput(Throughput::Elements(gray.pixel_count() as u64));

        group.bench_with_input(BenchmarkId::new("find_min_max", size), &gray, |b, img| {
            b.iter(|| img.find_min_max(black_box(0)))
        });

        group.bench_with_input(BenchmarkId::new("abs", size), &gray, |b, img| {
            b.iter(|| {
                let mut copy = img.clone();
                copy.abs();
                copy
            })
        });
    }

    group.finish();
}

/// Benchmark region extraction and border sampling.
fn bench_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions");
    let img = Image::<u8>::filled(1024, 1024, &[1, 2, 3], PixelFormat::Rgb).unwrap_or_default();

    group.bench_function("sub_image_256", |b| {
        b.iter(|| img.sub_image(black_box(-64), 100, ImageDimension::new(256, 256)))
    });

    group.bench_function("with_border_8", |b| b.iter(|| img.with_border(black_box(8), 8)));

    for mode in [BorderMode::Clamp, BorderMode::Wrap, BorderMode::Enlarge, BorderMode::Zero] {
        group.bench_with_input(BenchmarkId::new("border_ring", format!("{mode:?}")), &mode, |b, &mode| {
            b.iter(|| {
                let mut acc = 0u32;
                for i in -4..1028 {
                    acc += img.pixel_with_border(i, -1, mode)[0] as u32;
                    acc += img.pixel_with_border(-1, i, mode)[0] as u32;
                }
                acc
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lines, bench_analysis, bench_regions);
criterion_main!(benches);
