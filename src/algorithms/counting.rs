//! Counting sort
//!
//! Counts are indexed by value from zero, so the range is `max + 1`.
//! Inputs whose maximum would need more than [`COUNTING_SORT_MAX_RANGE`]
//! counters are refused.

use super::SortError;
use crate::constants::COUNTING_SORT_MAX_RANGE;

pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    let Some(&max) = data.iter().max() else {
        return Ok(());
    };

    let range = u64::from(max) + 1;
    if range > COUNTING_SORT_MAX_RANGE {
        return Err(SortError::RangeTooLarge(range));
    }

    let mut counts = vec![0usize; range as usize];
    for &value in data.iter() {
        counts[value as usize] += 1;
    }

    let mut pos = 0;
    for (value, &count) in counts.iter().enumerate() {
        data[pos..pos + count].fill(value as u32);
        pos += count;
    }
    Ok(())
}
