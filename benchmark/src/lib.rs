// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! sortbench Benchmark Engine
//!
//! Times the sort operations provided by `sortbench-core` and reports the
//! measurements.
//!
//! # Components
//!
//! - **Harness**: repeated timed runs of one algorithm on private dataset copies
//! - **Metrics**: per-algorithm results with mean, min, max and population
//!   standard deviation
//! - **Orchestrator**: one blocking worker per algorithm, joined before any
//!   result is returned
//! - **Reporter**: JSON to stdout and to a results file, with a fallback path
//!
//! # Data Output
//!
//! Results are a JSON array with one object per algorithm, in request order.

pub mod harness;
pub mod metrics;
pub mod orchestrator;
pub mod reporter;

pub use harness::BenchmarkHarness;
pub use metrics::{BenchmarkResult, SystemInfo, TimingStatistics};
pub use orchestrator::Orchestrator;
pub use reporter::{JsonReporter, PersistOutcome, ReporterError};
