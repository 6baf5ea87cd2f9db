// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Divide-and-conquer and heap-based comparison sorts.

/// Quick sort with a last-element (Lomuto) pivot.
///
/// Recurses into the smaller partition and loops over the larger one, so the
/// stack depth stays logarithmic even on already-sorted input.
pub fn quick_sort(data: &mut [i64]) {
    let mut data = data;

    while data.len() > 1 {
        let pivot = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        // right[0] is the pivot, already in its final position
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Partition around the last element and return its final index.
fn partition(data: &mut [i64]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    let mut store = 0;

    for j in 0..high {
        if data[j] < pivot {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}

/// Top-down merge sort. Allocates a single scratch buffer up front.
pub fn merge_sort(data: &mut [i64]) {
    if data.len() < 2 {
        return;
    }

    let mut scratch = data.to_vec();
    merge_sort_recursive(data, &mut scratch);
}

fn merge_sort_recursive(data: &mut [i64], scratch: &mut [i64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_recursive(left, scratch_left);
        merge_sort_recursive(right, scratch_right);
    }

    merge(data, mid, scratch);
}

/// Merge the sorted halves `data[..mid]` and `data[mid..]`. Stable.
fn merge(data: &mut [i64], mid: usize, scratch: &mut [i64]) {
    scratch[..data.len()].copy_from_slice(data);
    let (left, right) = scratch[..data.len()].split_at(mid);

    let (mut i, mut j) = (0, 0);
    for slot in data.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Heap sort on an implicit max-heap.
pub fn heap_sort(data: &mut [i64]) {
    let size = data.len();
    if size < 2 {
        return;
    }

    for root in (0..size / 2).rev() {
        sift_down(data, root, size);
    }

    for end in (1..size).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Restore the max-heap property for the subtree at `root` within `data[..len]`.
fn sift_down(data: &mut [i64], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && data[left] > data[largest] {
            largest = left;
        }
        if right < len && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        data.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot() {
        let mut data = vec![5, 3, 8, 1, 4];
        let pivot = partition(&mut data);
        assert_eq!(data[pivot], 4);
        assert!(data[..pivot].iter().all(|&x| x < 4));
        assert!(data[pivot + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn test_quick_sort_large_sorted_input() {
        // Degenerate pivot choice on sorted input must not blow the stack
        let mut data: Vec<i64> = (0..20_000).collect();
        quick_sort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_merge_sort_odd_length() {
        let mut data = vec![9, -2, 7, 7, 0, 3, -8];
        merge_sort(&mut data);
        assert_eq!(data, vec![-8, -2, 0, 3, 7, 7, 9]);
    }

    #[test]
    fn test_heap_sort_reverse() {
        let mut data: Vec<i64> = (0..100).rev().collect();
        heap_sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_sift_down_restores_heap() {
        let mut data = vec![1, 9, 8, 4, 5];
        sift_down(&mut data, 0, 5);
        assert_eq!(data[0], 9);
    }
}
