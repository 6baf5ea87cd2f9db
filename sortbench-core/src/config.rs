// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict validation.
//!
//! The configuration file is optional; every field has a default and
//! command-line flags override whatever the file sets. Any invalid field is
//! rejected before a single benchmark starts.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SortBenchError, SortBenchResult};
use crate::types::{RunCount, WarmupCount, DEFAULT_RUNS};

/// Default primary results file, relative to the working directory.
pub const DEFAULT_RESULTS_FILE: &str = "results/results_rust.json";
/// Default fallback results file, used when the primary cannot be written.
pub const DEFAULT_FALLBACK_FILE: &str = "results_rust.json";

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_runs")]
    runs: i64,
    #[serde(default)]
    warmup: i64,
    #[serde(default)]
    verify: bool,
    #[serde(default)]
    output: RawOutputConfig,
}

fn default_runs() -> i64 {
    i64::from(DEFAULT_RUNS)
}

/// Raw output configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutputConfig {
    #[serde(default = "default_results_file")]
    results_file: String,
    #[serde(default = "default_fallback_file")]
    fallback_file: String,
}

fn default_results_file() -> String {
    DEFAULT_RESULTS_FILE.to_string()
}

fn default_fallback_file() -> String {
    DEFAULT_FALLBACK_FILE.to_string()
}

impl Default for RawOutputConfig {
    fn default() -> Self {
        Self {
            results_file: default_results_file(),
            fallback_file: default_fallback_file(),
        }
    }
}

/// Validated output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub results_file: PathBuf,
    pub fallback_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            fallback_file: PathBuf::from(DEFAULT_FALLBACK_FILE),
        }
    }
}

/// Complete validated benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BenchConfig {
    pub runs: RunCount,
    pub warmup: WarmupCount,
    pub verify: bool,
    pub output: OutputConfig,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> SortBenchResult<BenchConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SortBenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SortBenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        let config = Self::load_string(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Load and validate configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn load_string(content: &str) -> SortBenchResult<BenchConfig> {
        if content.trim().is_empty() {
            return Ok(BenchConfig::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| SortBenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> SortBenchResult<BenchConfig> {
        let runs = RunCount::new(raw.runs)?;
        let warmup = WarmupCount::new(raw.warmup)?;
        let output = Self::validate_output(raw.output)?;

        Ok(BenchConfig {
            runs,
            warmup,
            verify: raw.verify,
            output,
        })
    }

    /// Validate output paths.
    fn validate_output(raw: RawOutputConfig) -> SortBenchResult<OutputConfig> {
        for (field, value) in [
            ("output.results_file", &raw.results_file),
            ("output.fallback_file", &raw.fallback_file),
        ] {
            if value.trim().is_empty() {
                return Err(SortBenchError::InvalidArgument {
                    field,
                    value: value.clone(),
                    reason: "Path cannot be empty".to_string(),
                });
            }
        }

        Ok(OutputConfig {
            results_file: PathBuf::from(raw.results_file),
            fallback_file: PathBuf::from(raw.fallback_file),
        })
    }
}
