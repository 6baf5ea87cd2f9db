//! Custom error types for sortbench.
//!
//! Every failure the harness can report is an explicit variant, grouped by the
//! stage that detects it. No `Box<dyn Error>`, no `anyhow::Result` in library
//! code.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmark harness.
#[derive(Debug, Error)]
pub enum SortBenchError {
    // =========================================================================
    // Argument Errors - Fail-Fast Before Any Work Starts
    // =========================================================================
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Could not read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No data to sort in {path}")]
    NoData { path: PathBuf },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Execution Errors - Surface After All Workers Joined
    // =========================================================================
    #[error("Benchmark of {algorithm} failed: {reason}")]
    ExecutionFailed { algorithm: String, reason: String },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl SortBenchError {
    /// Whether the error was caused by the caller's arguments or inputs,
    /// as opposed to a failure while benchmarks were running.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SortBenchError::InvalidArgument { .. }
                | SortBenchError::MissingArgument { .. }
                | SortBenchError::UnknownAlgorithm { .. }
                | SortBenchError::ConfigNotFound { .. }
                | SortBenchError::ConfigParse { .. }
        )
    }
}

/// Result type alias using SortBenchError.
pub type SortBenchResult<T> = Result<T, SortBenchError>;
