//! Fixed registry mapping algorithm names to sort operations.
//!
//! The set of algorithms is closed, so the registry is an enum-to-function
//! table rather than a dynamic map.

use std::fmt;
use std::str::FromStr;

use crate::algorithms::{self, SortFn};
use crate::error::{SortBenchError, SortBenchResult};

/// The sorting algorithms the harness can benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Counting,
    Radix,
    Bucket,
}

impl Algorithm {
    /// Every supported algorithm, in canonical order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    /// Identifier used on the command line and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::Counting => "counting_sort",
            Algorithm::Radix => "radix_sort",
            Algorithm::Bucket => "bucket_sort",
        }
    }

    /// Human-readable name with complexity class.
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "O(n^2)",
            Algorithm::Selection => "O(n^2)",
            Algorithm::Insertion => "O(n^2)",
            Algorithm::Quick => "O(n log n) average",
            Algorithm::Merge => "O(n log n)",
            Algorithm::Heap => "O(n log n)",
            Algorithm::Counting => "O(n + k)",
            Algorithm::Radix => "O(d x (n + k))",
            Algorithm::Bucket => "O(n + k)",
        }
    }

    /// The in-place sort implementing this algorithm.
    pub fn operation(&self) -> SortFn {
        match self {
            Algorithm::Bubble => algorithms::bubble_sort,
            Algorithm::Selection => algorithms::selection_sort,
            Algorithm::Insertion => algorithms::insertion_sort,
            Algorithm::Quick => algorithms::quick_sort,
            Algorithm::Merge => algorithms::merge_sort,
            Algorithm::Heap => algorithms::heap_sort,
            Algorithm::Counting => algorithms::counting_sort,
            Algorithm::Radix => algorithms::radix_sort,
            Algorithm::Bucket => algorithms::bucket_sort,
        }
    }

    /// Pair the algorithm's name with its operation.
    pub fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor::new(self.name(), self.operation())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SortBenchError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// A named sort operation, the unit of work handed to a benchmark worker.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    /// Name reported in results.
    pub name: String,
    /// In-place ascending sort.
    pub operation: SortFn,
}

impl AlgorithmDescriptor {
    /// Create a descriptor from a name and an operation.
    pub fn new(name: impl Into<String>, operation: SortFn) -> Self {
        Self {
            name: name.into(),
            operation,
        }
    }
}

/// Registry of the built-in algorithms.
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    algorithms: &'static [Algorithm],
}

impl AlgorithmRegistry {
    /// Create the registry of all built-in algorithms.
    pub fn new() -> Self {
        Self {
            algorithms: &Algorithm::ALL,
        }
    }

    /// Look up a single algorithm by name.
    pub fn lookup(&self, name: &str) -> SortBenchResult<AlgorithmDescriptor> {
        self.algorithms
            .iter()
            .find(|algorithm| algorithm.name() == name)
            .map(Algorithm::descriptor)
            .ok_or_else(|| SortBenchError::UnknownAlgorithm {
                name: name.to_string(),
            })
    }

    /// Resolve every name, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> SortBenchResult<Vec<AlgorithmDescriptor>> {
        names.iter().map(|name| self.lookup(name.as_ref())).collect()
    }

    /// Check if an algorithm name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.iter().any(|algorithm| algorithm.name() == name)
    }

    /// Names of all registered algorithms, in canonical order.
    pub fn names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(Algorithm::name).collect()
    }

    /// All registered algorithms.
    pub fn algorithms(&self) -> &'static [Algorithm] {
        self.algorithms
    }

    /// Get the number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_nine_algorithms() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(registry.len(), 9);
        assert!(!registry.is_empty());
        assert_eq!(
            registry.names(),
            vec![
                "bubble_sort",
                "selection_sort",
                "insertion_sort",
                "quick_sort",
                "merge_sort",
                "heap_sort",
                "counting_sort",
                "radix_sort",
                "bucket_sort",
            ]
        );
    }

    #[test]
    fn test_lookup_known() {
        let registry = AlgorithmRegistry::new();
        let descriptor = registry.lookup("quick_sort").unwrap();
        assert_eq!(descriptor.name, "quick_sort");

        let mut data = vec![5, 3, 1, 4, 2];
        (descriptor.operation)(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = AlgorithmRegistry::new();
        let err = registry.lookup("shell_sort").unwrap_err();
        assert!(matches!(err, SortBenchError::UnknownAlgorithm { ref name } if name == "shell_sort"));
        assert!(!registry.contains("shell_sort"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = AlgorithmRegistry::new();
        assert!(registry.lookup("Quick_Sort").is_err());
    }

    #[test]
    fn test_resolve_fails_on_any_unknown() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(
            registry.resolve(&["bubble_sort", "merge_sort"]).unwrap().len(),
            2
        );
        assert!(registry
            .resolve(&["bubble_sort", "shell_sort", "merge_sort"])
            .is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }
}
