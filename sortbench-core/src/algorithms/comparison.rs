// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Quadratic comparison sorts.

/// Bubble sort with early exit once a pass makes no swaps.
pub fn bubble_sort(data: &mut [i64]) {
    let mut size = data.len();
    if size < 2 {
        return;
    }

    loop {
        let mut swapped = false;

        for index in 1..size {
            if data[index - 1] > data[index] {
                data.swap(index - 1, index);
                swapped = true;
            }
        }

        // The largest remaining element has bubbled into place
        size -= 1;
        if !swapped || size < 2 {
            break;
        }
    }
}

/// Selection sort.
pub fn selection_sort(data: &mut [i64]) {
    let size = data.len();
    if size < 2 {
        return;
    }

    for index in 0..size - 1 {
        let mut min_index = index;

        for j in index + 1..size {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }

        if min_index != index {
            data.swap(index, min_index);
        }
    }
}

/// Insertion sort.
pub fn insertion_sort(data: &mut [i64]) {
    for index in 1..data.len() {
        let key = data[index];
        let mut j = index;

        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }

        data[j] = key;
    }
}
