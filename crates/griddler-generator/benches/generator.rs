//! Benchmarks for nonogram board generation.
//!
//! Measures the complete generation path (candidate fill, clue derivation,
//! viability gate) for the two board sizes players see most.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple fill patterns.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use griddler_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_10(c: &mut Criterion) {
    bench_generate(c, "generate_10", 10);
}

fn bench_generate_20(c: &mut Criterion) {
    bench_generate(c, "generate_20", 20);
}

fn bench_generate(c: &mut Criterion, name: &str, size: usize) {
    let generator = PuzzleGenerator::new(size).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_generate_10,
        bench_generate_20
);
criterion_main!(benches);
