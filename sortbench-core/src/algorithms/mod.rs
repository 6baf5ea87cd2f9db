// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Classical in-place sorting algorithms.
//!
//! Every function here has the same contract: sort the slice in ascending
//! order, in place, touching nothing but the slice. They are grouped by family:
//!
//! - **comparison**: quadratic exchange sorts (bubble, selection, insertion)
//! - **divide**: `O(n log n)` comparison sorts (quick, merge, heap)
//! - **distribution**: non-comparison sorts (counting, radix, bucket)

pub mod comparison;
pub mod distribution;
pub mod divide;

pub use comparison::{bubble_sort, insertion_sort, selection_sort};
pub use distribution::{bucket_sort, counting_sort, radix_sort, COUNTING_SORT_MAX_SPAN};
pub use divide::{heap_sort, merge_sort, quick_sort};

/// Signature shared by every sort operation.
pub type SortFn = fn(&mut [i64]);

/// Check whether a slice is in non-decreasing order.
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[7]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
        assert!(is_sorted(&[-5, -5, 0, 9]));
    }
}
