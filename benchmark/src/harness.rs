// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for timing one sort operation over repeated runs.
//!
//! Every run sorts a fresh private copy of the dataset, so runs are
//! independent and the shared dataset is never touched. Only the sort call
//! itself sits between the two timestamps; the copy is made beforehand.

use std::time::Instant;

use sortbench_core::algorithms::is_sorted;
use sortbench_core::{AlgorithmDescriptor, Dataset, RunCount, SortBenchError, WarmupCount};

use crate::metrics::{BenchmarkResult, TimingStatistics};

/// A benchmark harness for measuring sort durations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkHarness {
    /// Number of untimed warm-up runs before measurement
    warmup: WarmupCount,
    /// Number of timed runs
    runs: RunCount,
    /// Whether to check the output of an extra run after measurement
    verify: bool,
}

impl BenchmarkHarness {
    /// Create a new harness with the default run count, no warm-up and no
    /// verification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of timed runs.
    pub fn runs(mut self, runs: RunCount) -> Self {
        self.runs = runs;
        self
    }

    /// Set the number of untimed warm-up runs.
    pub fn warmup(mut self, warmup: WarmupCount) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set whether to verify the sort output after measurement.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Number of timed runs per algorithm.
    pub fn run_count(&self) -> RunCount {
        self.runs
    }

    /// Benchmark one algorithm and collect its measurements.
    ///
    /// Returns exactly `runs` durations in seconds, in execution order. A
    /// panic raised by the sort operation is not caught here.
    pub fn run(
        &self,
        descriptor: &AlgorithmDescriptor,
        dataset: &Dataset,
    ) -> Result<BenchmarkResult, SortBenchError> {
        let span = tracing::debug_span!("benchmark", algorithm = %descriptor.name);
        let _enter = span.enter();

        // Warmup phase
        for _ in 0..self.warmup.get() {
            let mut copy = dataset.to_vec();
            (descriptor.operation)(&mut copy);
        }

        // Measurement phase
        let mut times = Vec::with_capacity(self.runs.get() as usize);
        for run in 0..self.runs.get() {
            let seconds = time_once(descriptor, dataset);
            tracing::trace!(run, seconds, "Run finished");
            times.push(seconds);
        }

        if self.verify {
            verify_output(descriptor, dataset)?;
        }

        let result = BenchmarkResult::new(descriptor.name.clone(), times);
        tracing::info!(
            algorithm = %descriptor.name,
            runs = result.runs(),
            mean = %TimingStatistics::format_seconds(result.statistics().mean),
            min = %TimingStatistics::format_seconds(result.statistics().min),
            max = %TimingStatistics::format_seconds(result.statistics().max),
            "Benchmark finished"
        );
        Ok(result)
    }
}

/// Time a single sort of a fresh copy of the dataset, in seconds.
pub fn time_once(descriptor: &AlgorithmDescriptor, dataset: &Dataset) -> f64 {
    let mut copy = dataset.to_vec();

    let start = Instant::now();
    (descriptor.operation)(&mut copy);
    let elapsed = start.elapsed();

    elapsed.as_secs_f64()
}

/// Sort one more copy and check the result is a sorted sequence of the same
/// length.
fn verify_output(
    descriptor: &AlgorithmDescriptor,
    dataset: &Dataset,
) -> Result<(), SortBenchError> {
    let mut copy = dataset.to_vec();
    (descriptor.operation)(&mut copy);

    if copy.len() != dataset.len() {
        return Err(SortBenchError::ExecutionFailed {
            algorithm: descriptor.name.clone(),
            reason: format!(
                "output has {} elements, input had {}",
                copy.len(),
                dataset.len()
            ),
        });
    }
    if !is_sorted(&copy) {
        return Err(SortBenchError::ExecutionFailed {
            algorithm: descriptor.name.clone(),
            reason: "output is not in ascending order".to_string(),
        });
    }

    tracing::debug!(algorithm = %descriptor.name, "Output verified");
    Ok(())
}
