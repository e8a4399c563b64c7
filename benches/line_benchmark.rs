#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kotsubu_line::prelude::*;

fn line_variants_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_variants");

    let variants = [
        ("plain", LineOptions::plain()),
        ("aa", LineOptions::anti_aliased(DEFAULT_AA_COLOR_RATE)),
        ("decay", LineOptions::decaying(DEFAULT_DECAY_SECTION_RATE, DEFAULT_AA_COLOR_RATE)),
        ("geometric", LineOptions::geometric(0.92, DEFAULT_AA_COLOR_RATE)),
    ];

    for length in [16, 256, 2048] {
        let mut fb = Framebuffer::new(length + 1, length / 2 + 1).unwrap();
        let end = Point::new(length as i32, (length / 2) as i32);

        for (name, options) in &variants {
            group.bench_with_input(
                BenchmarkId::new(*name, length),
                &length,
                |b, _| {
                    b.iter(|| {
                        rasterize(&mut fb, Point::ORIGIN, black_box(end), ColorF::SKY, options);
                    });
                },
            );
        }
    }

    group.finish();
}

fn board_present_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_present");

    for scale in [4.0f32, 12.0] {
        let mut board = PixelBoard::new(400, 300, scale).unwrap();
        let (start, end) = (Point::new(0, 0), Point::new(399, 150));
        render_decay_line(&mut board, start, end, ColorF::SKY, 0.5, 0.3);

        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, _| {
            b.iter(|| board.present(black_box(Rgba::BLACK)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, line_variants_benchmark, board_present_benchmark);
criterion_main!(benches);
