// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Synthetic dataset generation.
//!
//! Produces integer arrays in `[1, size]` drawn from one of several
//! distributions, with a controllable fraction left unsorted. Seeded
//! generators are fully reproducible.

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{SortBenchError, SortBenchResult};
use crate::types::{DatasetSize, Perturbation};

const NORMAL_MEAN: f64 = 0.5;
const NORMAL_STD_DEV: f64 = 0.2;
const EXPONENTIAL_LAMBDA: f64 = 2.0;
const BETA_ALPHA: f64 = 2.0;
const BETA_BETA: f64 = 5.0;

/// Shape of the generated values before scaling to `[1, size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    /// Normal with mean 0.5 and standard deviation 0.2, clamped to `[0, 1]`.
    Normal,
    /// Exponential with rate 2.0, truncated to `[0, 1]`.
    Exponential,
    /// Beta(2, 5) approximation.
    Beta,
}

impl Distribution {
    /// All distributions, in the order shown in help output.
    pub const ALL: [Distribution; 4] = [
        Distribution::Uniform,
        Distribution::Normal,
        Distribution::Exponential,
        Distribution::Beta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
            Distribution::Exponential => "exponential",
            Distribution::Beta => "beta",
        }
    }

    /// Draw one value in `[0, 1]`.
    fn sample(&self, rng: &mut SmallRng) -> f64 {
        // 1 - [0, 1) keeps the value away from zero for the log transforms
        let u1 = 1.0 - rng.gen::<f64>();
        let u2 = rng.gen::<f64>();

        let value = match self {
            Distribution::Uniform => u2,
            Distribution::Normal => {
                let magnitude = (-2.0 * u1.ln()).sqrt();
                NORMAL_MEAN + NORMAL_STD_DEV * magnitude * (std::f64::consts::TAU * u2).cos()
            }
            Distribution::Exponential => {
                // Inverse CDF of the exponential truncated to [0, 1]
                let tail = 1.0 - (-EXPONENTIAL_LAMBDA).exp();
                -(1.0 - u2 * tail).ln() / EXPONENTIAL_LAMBDA
            }
            Distribution::Beta => {
                let x = u1.powf(1.0 / BETA_ALPHA);
                let y = u2.powf(1.0 / BETA_BETA);
                if x + y > 0.0 {
                    x / (x + y)
                } else {
                    0.0
                }
            }
        };

        value.clamp(0.0, 1.0)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Distribution {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Distribution::ALL
            .iter()
            .copied()
            .find(|distribution| distribution.name() == lower)
            .ok_or_else(|| SortBenchError::InvalidArgument {
                field: "distribution",
                value: s.to_string(),
                reason: "Expected one of: uniform, normal, exponential, beta".to_string(),
            })
    }
}

/// Random dataset generator.
pub struct DatasetGenerator {
    rng: SmallRng,
}

impl DatasetGenerator {
    /// Create a generator; a seed makes the output reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate `size` values in `[1, size]`.
    ///
    /// The first `size * (1 - perturbation)` elements are sorted, so a
    /// perturbation of 0.0 yields a fully sorted array and 1.0 a fully random
    /// one.
    pub fn generate(
        &mut self,
        size: DatasetSize,
        distribution: Distribution,
        perturbation: Perturbation,
    ) -> Vec<i64> {
        let size = size.get();
        let mut values: Vec<i64> = (0..size)
            .map(|_| scale_to_range(distribution.sample(&mut self.rng), size))
            .collect();

        let sorted_prefix = (size as f64 * (1.0 - perturbation.get())) as usize;
        if sorted_prefix > 1 {
            values[..sorted_prefix.min(size)].sort_unstable();
        }

        tracing::debug!(
            size,
            distribution = %distribution,
            perturbation = perturbation.get(),
            sorted_prefix,
            "Generated dataset"
        );
        values
    }
}

/// Map a value in `[0, 1]` onto the integers `[1, max]`.
fn scale_to_range(value: f64, max: usize) -> i64 {
    if max <= 1 {
        return 1;
    }
    let value = value.clamp(0.0, 1.0);
    (value * (max - 1) as f64) as i64 + 1
}

/// Fraction of adjacent pairs already in order, as a percentage.
pub fn sorted_pair_percentage(values: &[i64]) -> f64 {
    if values.len() < 2 {
        return 100.0;
    }
    let ordered = values.windows(2).filter(|w| w[0] <= w[1]).count();
    ordered as f64 / (values.len() - 1) as f64 * 100.0
}

/// Write values one per line, in the format `Dataset::from_file` reads.
pub fn write_dataset(path: impl AsRef<Path>, values: &[i64]) -> SortBenchResult<()> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| SortBenchError::Io {
        context: "writing dataset file",
        source: e,
    };

    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{}", value).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), len = values.len(), "Wrote dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;
    use tempfile::TempDir;

    fn size(n: usize) -> DatasetSize {
        DatasetSize::new(n).unwrap()
    }

    fn level(p: f64) -> Perturbation {
        Perturbation::new(p).unwrap()
    }

    #[test]
    fn test_values_within_range() {
        let mut generator = DatasetGenerator::new(Some(7));
        for distribution in Distribution::ALL {
            let values = generator.generate(size(1000), distribution, level(1.0));
            assert_eq!(values.len(), 1000);
            assert!(
                values.iter().all(|&v| (1..=1000).contains(&v)),
                "{} produced out-of-range values",
                distribution
            );
        }
    }

    #[test]
    fn test_zero_perturbation_is_sorted() {
        let mut generator = DatasetGenerator::new(Some(1));
        let values = generator.generate(size(500), Distribution::Normal, level(0.0));
        assert_eq!(sorted_pair_percentage(&values), 100.0);
    }

    #[test]
    fn test_partial_perturbation_sorts_prefix() {
        let mut generator = DatasetGenerator::new(Some(3));
        let values = generator.generate(size(1000), Distribution::Uniform, level(0.5));
        assert!(values[..500].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = DatasetGenerator::new(Some(42)).generate(size(100), Distribution::Beta, level(1.0));
        let b = DatasetGenerator::new(Some(42)).generate(size(100), Distribution::Beta, level(1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_element() {
        let mut generator = DatasetGenerator::new(Some(9));
        let values = generator.generate(size(1), Distribution::Exponential, level(1.0));
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_distribution_from_str() {
        assert_eq!("Normal".parse::<Distribution>().unwrap(), Distribution::Normal);
        assert_eq!("beta".parse::<Distribution>().unwrap(), Distribution::Beta);
        assert!("gaussian".parse::<Distribution>().is_err());
    }

    #[test]
    fn test_sorted_pair_percentage() {
        assert_eq!(sorted_pair_percentage(&[1, 2, 3]), 100.0);
        assert_eq!(sorted_pair_percentage(&[3, 2, 1]), 0.0);
        assert_eq!(sorted_pair_percentage(&[1, 3, 2]), 50.0);
    }

    #[test]
    fn test_written_dataset_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("generated.txt");
        let values = DatasetGenerator::new(Some(5)).generate(size(64), Distribution::Uniform, level(1.0));

        write_dataset(&path, &values).unwrap();
        let dataset = Dataset::from_file(&path).unwrap();
        assert_eq!(dataset.as_slice(), values.as_slice());
    }
}
