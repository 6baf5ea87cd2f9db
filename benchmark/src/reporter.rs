// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON report generation for benchmark results.
//!
//! Results are rendered once, printed, then saved to the primary results
//! file. If that write fails the same document goes to the fallback file.
//! Persistence problems are logged and reported as a [`PersistOutcome`];
//! they never fail the benchmark.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use sortbench_core::OutputConfig;
use thiserror::Error;

use crate::metrics::BenchmarkResult;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to write results to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where the rendered results ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Written to the primary results file
    Primary(PathBuf),
    /// Primary write failed; written to the fallback file
    Fallback(PathBuf),
    /// Neither file could be written
    Failed,
}

impl PersistOutcome {
    /// Path of the file that was written, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PersistOutcome::Primary(path) | PersistOutcome::Fallback(path) => Some(path),
            PersistOutcome::Failed => None,
        }
    }
}

/// JSON reporter for benchmark results.
#[derive(Debug, Clone)]
pub struct JsonReporter {
    results_file: PathBuf,
    fallback_file: PathBuf,
}

impl JsonReporter {
    /// Create a reporter with explicit primary and fallback paths.
    pub fn new(results_file: impl Into<PathBuf>, fallback_file: impl Into<PathBuf>) -> Self {
        Self {
            results_file: results_file.into(),
            fallback_file: fallback_file.into(),
        }
    }

    /// Create a reporter from the output section of the configuration.
    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.results_file, &output.fallback_file)
    }

    /// Primary results path.
    pub fn results_file(&self) -> &Path {
        &self.results_file
    }

    /// Render results as a JSON array indented by four spaces.
    pub fn render(results: &[BenchmarkResult]) -> Result<String, ReporterError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        results.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Print results to `out`, then persist them.
    ///
    /// Only rendering and writing to `out` can fail; persistence failures are
    /// folded into the returned outcome.
    pub fn emit(
        &self,
        results: &[BenchmarkResult],
        out: &mut impl Write,
    ) -> Result<PersistOutcome, ReporterError> {
        let rendered = Self::render(results)?;
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        Ok(self.persist(&rendered))
    }

    /// Save an already-rendered document, falling back on failure.
    pub fn persist(&self, rendered: &str) -> PersistOutcome {
        match write_file(&self.results_file, rendered) {
            Ok(()) => {
                tracing::debug!(path = %self.results_file.display(), "Results saved");
                return PersistOutcome::Primary(self.results_file.clone());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not write primary results file, using fallback");
            }
        }

        match write_file(&self.fallback_file, rendered) {
            Ok(()) => {
                tracing::debug!(path = %self.fallback_file.display(), "Results saved to fallback");
                PersistOutcome::Fallback(self.fallback_file.clone())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not write fallback results file");
                PersistOutcome::Failed
            }
        }
    }

    /// Load a results file written by [`JsonReporter::emit`].
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>, ReporterError> {
        let file = File::open(path)?;
        let results = serde_json::from_reader(BufReader::new(file))?;
        Ok(results)
    }
}

/// Write `content` to `path`, creating missing parent directories.
fn write_file(path: &Path, content: &str) -> Result<(), ReporterError> {
    let write_error = |source| ReporterError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}
