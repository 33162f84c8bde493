//! Bubble sort

use super::SortError;

/// Bubble sort with early exit once a pass makes no swaps
pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    let n = data.len();
    for pass in 0..n {
        let mut swapped = false;
        for i in 0..n - 1 - pass {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
