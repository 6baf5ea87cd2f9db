// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Concurrent fan-out of benchmark workers.
//!
//! One blocking task is spawned per requested algorithm, all at once. Each
//! worker sends its finished result over an unbounded channel tagged with its
//! request index; the orchestrator joins every worker before it looks at the
//! channel, so a failure never leaves a worker running behind it. Any failure
//! fails the whole batch and no partial results are returned.

use std::any::Any;

use sortbench_core::{
    AlgorithmDescriptor, AlgorithmRegistry, Dataset, SortBenchError, SortBenchResult,
};
use tokio::sync::mpsc;
use tokio::task::JoinError;

use crate::harness::BenchmarkHarness;
use crate::metrics::BenchmarkResult;

/// Runs one benchmark worker per algorithm and gathers their results.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    harness: BenchmarkHarness,
    registry: AlgorithmRegistry,
}

impl Orchestrator {
    /// Create an orchestrator that benchmarks every algorithm with `harness`.
    pub fn new(harness: BenchmarkHarness) -> Self {
        Self {
            harness,
            registry: AlgorithmRegistry::new(),
        }
    }

    /// Benchmark the named algorithms concurrently.
    ///
    /// Every name is resolved before any worker starts, so an unknown name
    /// fails the batch without running anything.
    pub async fn run<S: AsRef<str>>(
        &self,
        names: &[S],
        dataset: &Dataset,
    ) -> SortBenchResult<Vec<BenchmarkResult>> {
        let descriptors = self.registry.resolve(names)?;
        self.run_descriptors(descriptors, dataset).await
    }

    /// Benchmark already-resolved descriptors concurrently.
    ///
    /// Results come back in the order the descriptors were given.
    pub async fn run_descriptors(
        &self,
        descriptors: Vec<AlgorithmDescriptor>,
        dataset: &Dataset,
    ) -> SortBenchResult<Vec<BenchmarkResult>> {
        let expected = descriptors.len();
        tracing::info!(
            algorithms = expected,
            runs = self.harness.run_count().get(),
            dataset_len = dataset.len(),
            "Starting benchmarks"
        );

        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, BenchmarkResult)>();

        // Fork
        let mut workers = Vec::with_capacity(expected);
        for (index, descriptor) in descriptors.into_iter().enumerate() {
            let tx = tx.clone();
            let harness = self.harness;
            let dataset = dataset.clone();
            let name = descriptor.name.clone();

            let handle = tokio::task::spawn_blocking(move || -> SortBenchResult<()> {
                let result = harness.run(&descriptor, &dataset)?;
                deliver(&tx, index, result)
            });
            tracing::debug!(algorithm = %name, index, "Worker spawned");
            workers.push((name, handle));
        }
        drop(tx);

        // Join
        let mut first_failure = None;
        for (name, handle) in workers {
            let failure = match handle.await {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(join_error) => SortBenchError::ExecutionFailed {
                    algorithm: name,
                    reason: describe_join_error(join_error),
                },
            };

            tracing::error!(error = %failure, "Benchmark worker failed");
            first_failure.get_or_insert(failure);
        }
        if let Some(failure) = first_failure {
            return Err(failure);
        }

        let mut slots: Vec<Option<BenchmarkResult>> = (0..expected).map(|_| None).collect();
        while let Some((index, result)) = rx.recv().await {
            slots[index] = Some(result);
        }

        let results: Vec<BenchmarkResult> = slots.into_iter().flatten().collect();
        if results.len() != expected {
            return Err(SortBenchError::ExecutionFailed {
                algorithm: "orchestrator".to_string(),
                reason: format!("collected {} of {} results", results.len(), expected),
            });
        }

        tracing::info!(results = results.len(), "All benchmarks finished");
        Ok(results)
    }
}

/// Send a finished result to the collector, naming the worker on failure.
fn deliver(
    tx: &mpsc::UnboundedSender<(usize, BenchmarkResult)>,
    index: usize,
    result: BenchmarkResult,
) -> SortBenchResult<()> {
    tx.send((index, result))
        .map_err(|mpsc::error::SendError((_, result))| SortBenchError::ExecutionFailed {
            algorithm: result.algorithm().to_string(),
            reason: "result channel closed before the result was delivered".to_string(),
        })
}

fn describe_join_error(error: JoinError) -> String {
    if error.is_panic() {
        format!("worker panicked: {}", panic_message(&*error.into_panic()))
    } else {
        "worker was cancelled".to_string()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::RunCount;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dataset(values: &[i64]) -> Dataset {
        Dataset::new(values.to_vec(), "inline").unwrap()
    }

    fn orchestrator(runs: i64) -> Orchestrator {
        Orchestrator::new(BenchmarkHarness::new().runs(RunCount::new(runs).unwrap()))
    }

    #[tokio::test]
    async fn test_two_algorithms_three_runs() {
        let results = orchestrator(3)
            .run(&["bubble_sort", "quick_sort"], &dataset(&[5, 3, 1, 4, 2]))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].algorithm(), "bubble_sort");
        assert_eq!(results[1].algorithm(), "quick_sort");
        for result in &results {
            assert_eq!(result.runs(), 3);
            assert_eq!(result.times().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_unknown_algorithm_fails_before_running() {
        let err = orchestrator(1)
            .run(&["quick_sort", "shell_sort"], &dataset(&[2, 1]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SortBenchError::UnknownAlgorithm { ref name } if name == "shell_sort"
        ));
    }

    #[tokio::test]
    async fn test_all_algorithms_give_distinct_results() {
        let names: Vec<&str> = AlgorithmRegistry::new().names();
        let input = dataset(&[9, -4, 7, 0, 3, 3, 12, -8, 5, 1]);

        for _ in 0..5 {
            let results = orchestrator(2).run(&names, &input).await.unwrap();

            assert_eq!(results.len(), names.len());
            let reported: HashSet<&str> = results.iter().map(|r| r.algorithm()).collect();
            assert_eq!(reported.len(), names.len());
            let order: Vec<&str> = results.iter().map(|r| r.algorithm()).collect();
            assert_eq!(order, names);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_panicking_worker_fails_batch_after_join() {
        static FINISHED: AtomicUsize = AtomicUsize::new(0);
        fn explode(_data: &mut [i64]) {
            panic!("comparator exploded");
        }
        fn slow_but_fine(data: &mut [i64]) {
            std::thread::sleep(std::time::Duration::from_millis(20));
            data.sort_unstable();
            FINISHED.fetch_add(1, Ordering::SeqCst);
        }

        let descriptors = vec![
            AlgorithmDescriptor::new("explode", explode),
            AlgorithmDescriptor::new("slow_but_fine", slow_but_fine),
        ];
        let err = orchestrator(2)
            .run_descriptors(descriptors, &dataset(&[3, 2, 1]))
            .await
            .unwrap_err();

        match err {
            SortBenchError::ExecutionFailed { algorithm, reason } => {
                assert_eq!(algorithm, "explode");
                assert!(reason.contains("comparator exploded"));
            }
            other => panic!("unexpected error: {other}"),
        }
        // The sibling ran to completion before the error surfaced
        assert_eq!(FINISHED.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_counting_sort_span_overflow_is_execution_error() {
        let err = orchestrator(1)
            .run(&["counting_sort"], &dataset(&[i64::MIN, 0, i64::MAX]))
            .await
            .unwrap_err();

        match err {
            SortBenchError::ExecutionFailed { algorithm, reason } => {
                assert_eq!(algorithm, "counting_sort");
                assert!(reason.contains("counting sort value span"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_verification_failure_fails_batch() {
        fn noop(_data: &mut [i64]) {}

        let harness = BenchmarkHarness::new()
            .runs(RunCount::new(1).unwrap())
            .verify(true);
        let descriptors = vec![
            AlgorithmDescriptor::new("noop", noop),
            AlgorithmRegistry::new().lookup("heap_sort").unwrap(),
        ];
        let err = Orchestrator::new(harness)
            .run_descriptors(descriptors, &dataset(&[2, 1]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SortBenchError::ExecutionFailed { ref algorithm, .. } if algorithm == "noop"
        ));
    }

    #[tokio::test]
    async fn test_empty_request_yields_no_results() {
        let names: [&str; 0] = [];
        let results = orchestrator(1).run(&names, &dataset(&[1])).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_deliver_to_closed_channel_names_worker() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let err = deliver(&tx, 0, BenchmarkResult::new("merge_sort", vec![0.1])).unwrap_err();

        match err {
            SortBenchError::ExecutionFailed { algorithm, reason } => {
                assert_eq!(algorithm, "merge_sort");
                assert!(reason.contains("channel closed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deliver_tags_result_with_index() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        deliver(&tx, 3, BenchmarkResult::new("heap_sort", vec![0.2])).unwrap();

        let (index, result) = rx.try_recv().unwrap();
        assert_eq!(index, 3);
        assert_eq!(result.algorithm(), "heap_sort");
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42u8), "unknown panic payload");
    }
}
