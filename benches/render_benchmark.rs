//! Benchmark for the dithering raster pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ascii_dither::config::DitherConfig;
use ascii_dither::pattern::render;
use ascii_dither::surface::{PixelSurface, Surface, TextSurface};

fn pixel_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_render");
    let config = DitherConfig::default();

    for (width, height) in [(800, 600), (1920, 1080), (3840, 2160)] {
        let mut surface = PixelSurface::create(width, height, &config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    render(black_box(&mut surface), &config);
                });
            },
        );
    }

    group.finish();
}

fn text_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_render");
    let config = DitherConfig::default();
    let mut surface = TextSurface::create(1920, 1080, &config).unwrap();

    group.bench_function("text_1920x1080", |b| {
        b.iter(|| {
            render(black_box(&mut surface), &config);
        });
    });

    group.finish();
}

criterion_group!(benches, pixel_render_benchmark, text_render_benchmark);
criterion_main!(benches);
