//! Benchmarks for the spx conversion stages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spx::{game_offset, render_kml, SpriteEntry, SpriteKind};

fn entries(n: usize) -> Vec<SpriteEntry> {
    (0..n)
        .map(|i| SpriteEntry {
            name: format!("obj_sprite_{}", i),
            kind: SpriteKind::Obj,
            offset: (i as i32 * 3, i as i32 * 7 % 600),
        })
        .collect()
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let names = [
        "obj_player",
        "label_score",
        "bg_mountains_far",
        "obj-not-really",
        "some layer with spaces",
    ];

    group.bench_function("classify_mixed", |b| {
        b.iter(|| {
            for name in &names {
                black_box(SpriteKind::classify(black_box(name)));
            }
        })
    });

    group.finish();
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("offsets");

    group.bench_function("game_offset", |b| {
        b.iter(|| game_offset(black_box(1080), black_box((64, 128)), black_box((13, 400))))
    });

    group.finish();
}

fn bench_metadata(c: &mut Criterion) {
    let mut group = c.benchmark_group("metadata");

    let small = entries(8);
    let large = entries(256);

    group.bench_function("render_kml_small", |b| {
        b.iter(|| render_kml(black_box((800, 600)), black_box(&small)))
    });

    group.bench_function("render_kml_large", |b| {
        b.iter(|| render_kml(black_box((1920, 1080)), black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, bench_classification, bench_offsets, bench_metadata);
criterion_main!(benches);
