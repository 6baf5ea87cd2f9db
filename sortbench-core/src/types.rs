// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by construction.
//! All types validate their invariants at creation time, so a run count of zero
//! or a perturbation of 1.5 can never reach the benchmark engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortBenchError;

/// Default number of timed runs per algorithm.
pub const DEFAULT_RUNS: u32 = 10;
/// Upper bound on untimed warm-up runs per algorithm.
pub const MAX_WARMUP_RUNS: u32 = 1000;
/// Largest dataset the generator will produce.
pub const MAX_DATASET_SIZE: usize = 500_000;

/// Validated number of timed runs per algorithm.
/// Must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct RunCount(u32);

impl RunCount {
    /// Create a new RunCount with validation.
    ///
    /// Takes a signed value so negative input is reported as such instead of
    /// wrapping.
    pub fn new(runs: i64) -> Result<Self, SortBenchError> {
        if runs < 1 {
            return Err(SortBenchError::InvalidArgument {
                field: "runs",
                value: runs.to_string(),
                reason: "Number of runs must be at least 1".to_string(),
            });
        }

        let runs = u32::try_from(runs).map_err(|_| SortBenchError::InvalidArgument {
            field: "runs",
            value: runs.to_string(),
            reason: format!("Number of runs must not exceed {}", u32::MAX),
        })?;

        Ok(Self(runs))
    }

    /// Get the inner value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for RunCount {
    fn default() -> Self {
        Self(DEFAULT_RUNS)
    }
}

impl fmt::Display for RunCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunCount {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let runs = s
            .trim()
            .parse::<i64>()
            .map_err(|_| SortBenchError::InvalidArgument {
                field: "runs",
                value: s.to_string(),
                reason: "Number of runs must be a positive integer".to_string(),
            })?;
        Self::new(runs)
    }
}

impl TryFrom<i64> for RunCount {
    type Error = SortBenchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RunCount> for u32 {
    fn from(runs: RunCount) -> Self {
        runs.0
    }
}

/// Validated number of untimed warm-up runs.
/// Zero disables warm-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct WarmupCount(u32);

impl WarmupCount {
    /// Create a new WarmupCount with bounds validation.
    pub fn new(runs: i64) -> Result<Self, SortBenchError> {
        if !(0..=i64::from(MAX_WARMUP_RUNS)).contains(&runs) {
            return Err(SortBenchError::InvalidArgument {
                field: "warmup",
                value: runs.to_string(),
                reason: format!("Warm-up runs must be between 0 and {}", MAX_WARMUP_RUNS),
            });
        }
        Ok(Self(runs as u32))
    }

    /// Get the inner value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl FromStr for WarmupCount {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let runs = s
            .trim()
            .parse::<i64>()
            .map_err(|_| SortBenchError::InvalidArgument {
                field: "warmup",
                value: s.to_string(),
                reason: "Warm-up runs must be a non-negative integer".to_string(),
            })?;
        Self::new(runs)
    }
}

impl TryFrom<i64> for WarmupCount {
    type Error = SortBenchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WarmupCount> for u32 {
    fn from(runs: WarmupCount) -> Self {
        runs.0
    }
}

/// Validated synthetic dataset size.
/// Must be between 1 and MAX_DATASET_SIZE elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSize(usize);

impl DatasetSize {
    /// Create a new DatasetSize with bounds validation.
    pub fn new(size: usize) -> Result<Self, SortBenchError> {
        if !(1..=MAX_DATASET_SIZE).contains(&size) {
            return Err(SortBenchError::InvalidArgument {
                field: "size",
                value: size.to_string(),
                reason: format!("Array size must be between 1 and {}", MAX_DATASET_SIZE),
            });
        }
        Ok(Self(size))
    }

    /// Get the inner value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl FromStr for DatasetSize {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|_| SortBenchError::InvalidArgument {
                field: "size",
                value: s.to_string(),
                reason: "Array size must be a positive integer".to_string(),
            })?;
        Self::new(size)
    }
}

/// Validated perturbation level.
/// 0.0 is a fully sorted array, 1.0 fully random.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation(f64);

impl Perturbation {
    /// Create a new Perturbation with range validation.
    pub fn new(level: f64) -> Result<Self, SortBenchError> {
        if !(0.0..=1.0).contains(&level) {
            return Err(SortBenchError::InvalidArgument {
                field: "perturbation",
                value: level.to_string(),
                reason: "Perturbation level must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(Self(level))
    }

    /// Get the inner value.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl FromStr for Perturbation {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .parse::<f64>()
            .map_err(|_| SortBenchError::InvalidArgument {
                field: "perturbation",
                value: s.to_string(),
                reason: "Perturbation level must be a number".to_string(),
            })?;
        Self::new(level)
    }
}

impl fmt::Display for Perturbation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
