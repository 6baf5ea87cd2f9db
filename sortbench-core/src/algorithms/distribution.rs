// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Distribution (non-comparison) sorts.
//!
//! All three are generalized to the full `i64` range: values are offset by
//! the slice minimum before being bucketed, so negative input sorts correctly.

/// Largest value span (max - min + 1) counting sort will allocate counters for.
///
/// Wider spans make the counter table unreasonably large; counting sort panics
/// instead of attempting the allocation.
pub const COUNTING_SORT_MAX_SPAN: u64 = 1 << 24;

const RADIX: usize = 10;

/// Distance of `value` above `min` as an unsigned key. Exact for any pair of
/// `i64` values with `value >= min`.
fn offset_key(value: i64, min: i64) -> u64 {
    value.wrapping_sub(min) as u64
}

/// Counting sort over the span `[min, max]`.
///
/// # Panics
///
/// Panics if the value span exceeds [`COUNTING_SORT_MAX_SPAN`].
pub fn counting_sort(data: &mut [i64]) {
    if data.len() < 2 {
        return;
    }
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return;
    };

    let span = offset_key(max, min).saturating_add(1);
    assert!(
        span <= COUNTING_SORT_MAX_SPAN,
        "counting sort value span {} exceeds limit of {} (min {}, max {})",
        span,
        COUNTING_SORT_MAX_SPAN,
        min,
        max
    );

    let mut counts = vec![0usize; span as usize];
    for &value in data.iter() {
        counts[offset_key(value, min) as usize] += 1;
    }

    let mut index = 0;
    for (offset, &count) in counts.iter().enumerate() {
        let value = min.wrapping_add(offset as i64);
        data[index..index + count].fill(value);
        index += count;
    }
}

/// LSD radix sort, base 10, on keys biased by the slice minimum.
pub fn radix_sort(data: &mut [i64]) {
    if data.len() < 2 {
        return;
    }
    let Some(&min) = data.iter().min() else {
        return;
    };

    let mut keys: Vec<u64> = data.iter().map(|&value| offset_key(value, min)).collect();
    let max_key = keys.iter().copied().max().unwrap_or(0);
    let mut output = vec![0u64; keys.len()];
    let mut exp: u64 = 1;

    while max_key / exp > 0 {
        let digit = |key: u64| ((key / exp) % RADIX as u64) as usize;
        let mut count = [0usize; RADIX];

        for &key in &keys {
            count[digit(key)] += 1;
        }
        for i in 1..RADIX {
            count[i] += count[i - 1];
        }
        // Walk backwards to keep each pass stable
        for &key in keys.iter().rev() {
            let d = digit(key);
            count[d] -= 1;
            output[count[d]] = key;
        }

        std::mem::swap(&mut keys, &mut output);
        match exp.checked_mul(RADIX as u64) {
            Some(next) => exp = next,
            None => break,
        }
    }

    for (slot, key) in data.iter_mut().zip(keys) {
        *slot = min.wrapping_add(key as i64);
    }
}

/// Bucket sort with `floor(sqrt(n))` equal-width buckets over `[min, max]`.
pub fn bucket_sort(data: &mut [i64]) {
    if data.len() < 2 {
        return;
    }
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return;
    };

    let bucket_count = ((data.len() as f64).sqrt() as usize).max(1);
    let span = offset_key(max, min) as f64 + 1.0;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];

    for &value in data.iter() {
        let position = offset_key(value, min) as f64 / span;
        let index = ((position * bucket_count as f64) as usize).min(bucket_count - 1);
        buckets[index].push(value);
    }

    let mut index = 0;
    for mut bucket in buckets {
        if bucket.len() > 1 {
            bucket.sort_unstable();
        }
        data[index..index + bucket.len()].copy_from_slice(&bucket);
        index += bucket.len();
    }
}
