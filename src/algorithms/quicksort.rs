//! Quicksort
//!
//! Median-of-three pivot with Hoare partitioning. Recursion only descends
//! into the smaller half, so stack depth stays logarithmic even on sorted
//! and reversed inputs.

use super::SortError;

/// Partitions at or below this length are finished with insertion sort
const INSERTION_THRESHOLD: usize = 16;

pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    quicksort(data.as_mut_slice());
    Ok(())
}

fn quicksort(mut slice: &mut [u32]) {
    while slice.len() > INSERTION_THRESHOLD {
        let split = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(split);
        if left.len() < right.len() {
            quicksort(left);
            slice = right;
        } else {
            quicksort(right);
            slice = left;
        }
    }
    insertion(slice);
}

/// Hoare partition; returns `p` such that every element of `[..p]` is
/// `<=` every element of `[p..]`, with `0 < p < len`.
fn partition(slice: &mut [u32]) -> usize {
    let last = slice.len() - 1;
    let mid = last / 2;

    // Order first/mid/last so the median sits at `mid`
    if slice[mid] < slice[0] {
        slice.swap(mid, 0);
    }
    if slice[last] < slice[0] {
        slice.swap(last, 0);
    }
    if slice[last] < slice[mid] {
        slice.swap(last, mid);
    }
    let pivot = slice[mid];

    let mut i = 0;
    let mut j = last;
    loop {
        while slice[i] < pivot {
            i += 1;
        }
        while slice[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j + 1;
        }
        slice.swap(i, j);
        i += 1;
        j -= 1;
    }
}

fn insertion(slice: &mut [u32]) {
    for i in 1..slice.len() {
        let value = slice[i];
        let mut j = i;
        while j > 0 && slice[j - 1] > value {
            slice[j] = slice[j - 1];
            j -= 1;
        }
        slice[j] = value;
    }
}
