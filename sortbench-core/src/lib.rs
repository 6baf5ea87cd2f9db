//! sortbench Core Library
//!
//! Core library for the sortbench sorting benchmark harness.
//! Provides the nine built-in sorting algorithms, the algorithm registry,
//! dataset loading and generation, validated configuration, and the shared
//! error taxonomy.

pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use algorithms::SortFn;
pub use config::{BenchConfig, ConfigLoader, OutputConfig};
pub use dataset::Dataset;
pub use error::{SortBenchError, SortBenchResult};
pub use generator::{DatasetGenerator, Distribution};
pub use registry::{Algorithm, AlgorithmDescriptor, AlgorithmRegistry};
pub use types::{DatasetSize, Perturbation, RunCount, WarmupCount};
