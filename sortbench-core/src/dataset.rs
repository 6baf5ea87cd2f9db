// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Input dataset loading.
//!
//! A dataset is read once and shared read-only between benchmark workers.
//! Each timed run clones it into a private buffer, so the shared copy is
//! never mutated.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SortBenchError, SortBenchResult};

/// Immutable, non-empty sequence of integers to be sorted.
///
/// Cloning is cheap: all clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Arc<[i64]>,
}

impl Dataset {
    /// Create a dataset from owned values.
    ///
    /// Returns `NoData` for an empty vector; `source` names the origin in the
    /// error message.
    pub fn new(values: Vec<i64>, source: impl AsRef<Path>) -> SortBenchResult<Self> {
        if values.is_empty() {
            return Err(SortBenchError::NoData {
                path: source.as_ref().to_path_buf(),
            });
        }
        Ok(Self {
            values: values.into(),
        })
    }

    /// Load a dataset from a file of whitespace-separated integers.
    pub fn from_file(path: impl AsRef<Path>) -> SortBenchResult<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| SortBenchError::DatasetRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let dataset = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), len = dataset.len(), "Loaded dataset");
        Ok(dataset)
    }

    /// Parse whitespace-separated integers.
    ///
    /// Tokens that are not valid `i64` values are skipped; if nothing valid
    /// remains the result is `NoData`.
    pub fn parse(content: &str, source: impl AsRef<Path>) -> SortBenchResult<Self> {
        let mut skipped = 0usize;
        let values: Vec<i64> = content
            .split_whitespace()
            .filter_map(|token| match token.parse::<i64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            tracing::warn!(
                source = %source.as_ref().display(),
                skipped,
                "Ignored tokens that are not integers"
            );
        }

        Self::new(values, source)
    }

    /// Copy the values into a fresh mutable buffer.
    pub fn to_vec(&self) -> Vec<i64> {
        self.values.to_vec()
    }

    /// Get the values as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl Deref for Dataset {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_whitespace_variants() {
        let dataset = Dataset::parse("5 3\n1\t4  \r\n 2\n", "inline").unwrap();
        assert_eq!(dataset.as_slice(), &[5, 3, 1, 4, 2]);
    }

    #[test]
    fn test_parse_negative_values() {
        let dataset = Dataset::parse("-7 0 12 -1", "inline").unwrap();
        assert_eq!(dataset.as_slice(), &[-7, 0, 12, -1]);
    }

    #[test]
    fn test_parse_skips_invalid_tokens() {
        let dataset = Dataset::parse("1 two 3 4.5 5", "inline").unwrap();
        assert_eq!(dataset.as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn test_parse_empty_is_no_data() {
        assert!(matches!(
            Dataset::parse("", "inline"),
            Err(SortBenchError::NoData { .. })
        ));
        assert!(matches!(
            Dataset::parse("  \n\t ", "inline"),
            Err(SortBenchError::NoData { .. })
        ));
        assert!(matches!(
            Dataset::parse("abc def", "inline"),
            Err(SortBenchError::NoData { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");
        std::fs::write(&path, "10\n9\n8\n").unwrap();

        let dataset = Dataset::from_file(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset[0], 10);
    }

    #[test]
    fn test_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Dataset::from_file(temp_dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SortBenchError::DatasetRead { .. })));
    }

    #[test]
    fn test_clones_share_storage() {
        let dataset = Dataset::new(vec![3, 2, 1], "inline").unwrap();
        let clone = dataset.clone();
        assert!(std::ptr::eq(dataset.as_slice(), clone.as_slice()));

        let mut copy = clone.to_vec();
        copy.sort();
        assert_eq!(dataset.as_slice(), &[3, 2, 1]);
    }
}
