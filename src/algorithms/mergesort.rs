//! Top-down merge sort with a single scratch buffer

use super::SortError;

pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    if data.len() < 2 {
        return Ok(());
    }
    let mut scratch = data.clone();
    merge_sort(&mut scratch, data);
    Ok(())
}

/// Sorts `dst` using `src` as scratch. Both must start with the same contents.
fn merge_sort(src: &mut [u32], dst: &mut [u32]) {
    let len = dst.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (src_left, src_right) = src.split_at_mut(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);
        // Roles swap at each level: the halves are sorted into `src`
        merge_sort(dst_left, src_left);
        merge_sort(dst_right, src_right);
    }
    merge(&src[..mid], &src[mid..], dst);
}

fn merge(left: &[u32], right: &[u32], out: &mut [u32]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
