// this_file: benches/composite.rs
//! Benchmarks for the compositor blit

use criterion::{criterion_group, criterion_main, Criterion};
use glyphcheck::{Canvas, GlyphBitmap};
use std::hint::black_box;

fn bench_blit(c: &mut Criterion) {
    let bitmap = GlyphBitmap::new(64, 64, vec![0x80; 64 * 64]).unwrap();

    c.bench_function("blit_contained", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.or_blit(black_box(&bitmap), 288, 208));
    });

    c.bench_function("blit_edge_clipped", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.or_blit(black_box(&bitmap), -32, 448));
    });

    c.bench_function("blit_out_of_bounds", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.or_blit(black_box(&bitmap), -1000, 100_000));
    });
}

criterion_group!(benches, bench_blit);
criterion_main!(benches);
