// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sorting algorithm microbenchmarks.
//!
//! Measures every registered algorithm on seeded random input at a few sizes,
//! plus the full orchestrated batch.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sortbench_benchmark::{BenchmarkHarness, Orchestrator};
use sortbench_core::{Algorithm, AlgorithmRegistry, Dataset, RunCount};
use std::time::Duration;

/// Input sizes to benchmark.
const INPUT_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Quadratic sorts get only the smaller inputs.
const QUADRATIC_LIMIT: usize = 1_000;

fn random_input(len: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen_range(1..=len as i64)).collect()
}

fn is_quadratic(algorithm: Algorithm) -> bool {
    matches!(
        algorithm,
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
    )
}

/// Benchmark each algorithm on uniformly random input.
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");
    group.measurement_time(Duration::from_secs(3));

    for &size in INPUT_SIZES {
        let input = random_input(size);

        for algorithm in Algorithm::ALL {
            if is_quadratic(algorithm) && size > QUADRATIC_LIMIT {
                continue;
            }
            let operation = algorithm.operation();

            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |data| operation(black_box(data)),
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

/// Benchmark the orchestrated batch of all algorithms on one dataset.
fn bench_orchestrated_batch(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let dataset = Dataset::new(random_input(1_000), "bench").expect("Failed to build dataset");
    let names = AlgorithmRegistry::new().names();
    let orchestrator =
        Orchestrator::new(BenchmarkHarness::new().runs(RunCount::new(1).expect("valid run count")));

    let mut group = c.benchmark_group("orchestrator");
    group.sample_size(20);
    group.bench_function("all_algorithms_1000", |b| {
        b.iter(|| {
            runtime
                .block_on(orchestrator.run(&names, &dataset))
                .expect("Batch failed")
        });
    });
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_orchestrated_batch);
criterion_main!(benches);
