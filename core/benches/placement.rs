use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mines_core::{GameConfig, GridModel, RandomMinePlacer};
use std::hint::black_box;

/// Rejection sampling slows down as the board fills up, these tiers show how much.
const TIERS: [(&str, GameConfig); 5] = [
    ("beginner", GameConfig::new_unchecked(8, 8, 10)),
    ("intermediate", GameConfig::new_unchecked(16, 16, 40)),
    ("expert", GameConfig::new_unchecked(16, 30, 99)),
    ("half", GameConfig::new_unchecked(16, 30, 240)),
    ("packed", GameConfig::new_unchecked(16, 30, 470)),
];

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, config) in TIERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(GridModel::new(config, RandomMinePlacer::new(seed)))
            });
        });
    }
    group.finish();
}

fn reveal(c: &mut Criterion) {
    let config = GameConfig::new_unchecked(16, 30, 99);
    let grid = GridModel::new(config, RandomMinePlacer::new(1)).expect("valid config");
    let start = grid
        .cells()
        .iter()
        .find(|cell| cell.is_blank())
        .map(|cell| cell.coords())
        .expect("expert board has a blank cell");

    c.bench_function("reveal/expert", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| black_box(grid.reveal(start)),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, placement, reveal);
criterion_main!(benches);
