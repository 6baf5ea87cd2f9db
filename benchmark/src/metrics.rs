// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result types and summary statistics for benchmark runs.
//!
//! This module defines the data structures used to capture and serialize
//! per-algorithm measurements. Field names match the JSON results format:
//! `algorithm`, `runs`, `times`, `average_time`, `min_time`, `max_time`,
//! `std_deviation`.

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Summary statistics over a set of run durations, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStatistics {
    /// Arithmetic mean
    #[serde(rename = "average_time")]
    pub mean: f64,
    /// Fastest run
    #[serde(rename = "min_time")]
    pub min: f64,
    /// Slowest run
    #[serde(rename = "max_time")]
    pub max: f64,
    /// Population standard deviation (divisor is the sample count)
    pub std_deviation: f64,
}

impl TimingStatistics {
    /// Calculate statistics from run durations in seconds.
    ///
    /// An empty slice yields all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let len = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / len;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let variance = samples
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;

        Self {
            mean,
            min,
            max,
            std_deviation: variance.sqrt(),
        }
    }

    /// Format a duration in seconds in human-readable form (auto-selects ns/μs/ms/s).
    pub fn format_seconds(seconds: f64) -> String {
        if seconds < 1e-6 {
            format!("{:.0}ns", seconds * 1e9)
        } else if seconds < 1e-3 {
            format!("{:.2}μs", seconds * 1e6)
        } else if seconds < 1.0 {
            format!("{:.2}ms", seconds * 1e3)
        } else {
            format!("{:.2}s", seconds)
        }
    }
}

/// The outcome of benchmarking one algorithm.
///
/// Built once by the harness from its measurements; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    algorithm: String,
    runs: u32,
    /// Run durations in seconds, in execution order
    times: Vec<f64>,
    #[serde(flatten)]
    statistics: TimingStatistics,
}

impl BenchmarkResult {
    /// Create a result from run durations, deriving the statistics.
    pub fn new(algorithm: impl Into<String>, times: Vec<f64>) -> Self {
        let statistics = TimingStatistics::from_samples(&times);
        Self {
            algorithm: algorithm.into(),
            runs: times.len() as u32,
            times,
            statistics,
        }
    }

    /// Name of the benchmarked algorithm.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Number of timed runs.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Run durations in seconds, in execution order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Derived summary statistics.
    pub fn statistics(&self) -> &TimingStatistics {
        &self.statistics
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
