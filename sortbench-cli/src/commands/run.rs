// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Default command - benchmark the requested algorithms on a dataset file.
//!
//! Every argument is validated and every algorithm name resolved before the
//! dataset is read, and the dataset is read before any worker starts.

use std::collections::HashSet;
use std::io;

use sortbench_benchmark::{BenchmarkHarness, JsonReporter, Orchestrator, SystemInfo};
use sortbench_core::{
    AlgorithmRegistry, BenchConfig, ConfigLoader, Dataset, OutputConfig, RunCount,
    SortBenchError, SortBenchResult, WarmupCount,
};

use crate::Cli;

pub async fn execute(cli: &Cli) -> SortBenchResult<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => BenchConfig::default(),
    };

    let file = cli
        .file
        .as_ref()
        .ok_or(SortBenchError::MissingArgument { name: "--file" })?;
    let list = cli
        .algorithms
        .as_deref()
        .ok_or(SortBenchError::MissingArgument {
            name: "--algorithms",
        })?;

    // CLI flags override the config file
    let runs = cli.runs.map(RunCount::new).transpose()?.unwrap_or(config.runs);
    let warmup = cli
        .warmup
        .map(WarmupCount::new)
        .transpose()?
        .unwrap_or(config.warmup);
    let verify = cli.verify || config.verify;
    let output = OutputConfig {
        results_file: cli
            .output
            .clone()
            .unwrap_or(config.output.results_file),
        fallback_file: config.output.fallback_file,
    };

    let names = parse_algorithm_list(list)?;
    let descriptors = AlgorithmRegistry::new().resolve(&names)?;
    let dataset = Dataset::from_file(file)?;

    tracing::info!(
        file = %file.display(),
        len = dataset.len(),
        algorithms = ?names,
        runs = runs.get(),
        warmup = warmup.get(),
        verify,
        "Benchmark configuration"
    );
    if tracing::enabled!(tracing::Level::DEBUG) {
        let info = SystemInfo::collect();
        tracing::debug!(
            os = %info.os,
            cpu = %info.cpu_model,
            cores = info.cpu_cores,
            memory_bytes = info.memory_bytes,
            "System information"
        );
    }

    let harness = BenchmarkHarness::new()
        .runs(runs)
        .warmup(warmup)
        .verify(verify);
    let results = Orchestrator::new(harness)
        .run_descriptors(descriptors, &dataset)
        .await?;

    let reporter = JsonReporter::from_config(&output);
    let outcome = reporter
        .emit(&results, &mut io::stdout().lock())
        .map_err(|e| SortBenchError::Io {
            context: "printing results",
            source: io::Error::other(e),
        })?;

    match outcome.path() {
        Some(path) => println!("Sorting completed. Results saved to {}", path.display()),
        None => {
            tracing::warn!("Results could not be saved to any file");
            println!("Sorting completed. Results were not saved.");
        }
    }

    Ok(())
}

/// Split a comma-separated algorithm list.
///
/// Whitespace around names is trimmed and empty segments are ignored. A
/// repeated name is dropped with a warning, keeping its first position.
pub fn parse_algorithm_list(list: &str) -> SortBenchResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if seen.insert(name) {
            names.push(name.to_string());
        } else {
            tracing::warn!(algorithm = name, "Ignoring duplicate algorithm");
        }
    }

    if names.is_empty() {
        return Err(SortBenchError::InvalidArgument {
            field: "algorithms",
            value: list.to_string(),
            reason: "At least one algorithm name is required".to_string(),
        });
    }

    Ok(names)
}
