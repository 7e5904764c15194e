use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for preset in Preset::ALL {
        group.bench_function(preset.name(), |b| {
            b.iter(|| RandomBoardGenerator::new(black_box(7)).generate(preset.config()))
        });
    }

    let dense = GameConfig::new_unchecked((MAX_SIDE, MAX_SIDE), mult(MAX_SIDE, MAX_SIDE) - 1);
    group.bench_function("dense_max", |b| {
        b.iter(|| RandomBoardGenerator::new(black_box(7)).generate(dense))
    });
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let board = Board::from_mine_coords((MAX_SIDE, MAX_SIDE), &[]).unwrap();
    c.bench_function("reveal_empty_max", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.reveal(black_box((0, 0))).unwrap()
        })
    });
}

criterion_group!(benches, bench_presets, bench_flood_fill);
criterion_main!(benches);
