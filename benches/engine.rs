use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use toruslife::{Engine, Grid, RuleSet};

fn make_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("bench grid");
    for y in 0..size {
        for x in 0..size {
            if (x + y) % 3 == 0 {
                grid.set(x, y, true);
            }
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let serial = Engine::new(RuleSet::default(), 1);
    let parallel = Engine::new(RuleSet::default(), 8);

    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| serial.step(&mut grid),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| parallel.step(&mut grid),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
