use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use shieldsweep_core::*;
use std::hint::black_box;

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [10u8, 64, 255] {
        let empty = MineLayout::from_mine_coords((size, size), &[]).unwrap();
        group.bench_function(format!("empty_{size}x{size}"), |b| {
            b.iter_batched(
                || PlayEngine::new(empty.clone()),
                |mut engine| black_box(engine.reveal((size / 2, size / 2)).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }

    let mut rng = SmallRng::seed_from_u64(7);
    let sparse = RejectionSampler.generate(GameConfig::new(64, 200), &mut rng);
    group.bench_function("sparse_64x64", |b| {
        b.iter_batched(
            || PlayEngine::new(sparse.clone()),
            |mut engine| {
                for row in 0..64 {
                    let _ = black_box(engine.reveal((row, row)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
