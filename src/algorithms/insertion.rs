//! Insertion sort

use super::SortError;

pub fn sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > value {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_duplicates() {
        let mut data = vec![2, 2, 1, 1, 0];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 1, 1, 2, 2]);
    }
}
