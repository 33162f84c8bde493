//! Dataset generation
//!
//! Datasets are drawn from raw entropy: `size * 4` bytes decoded as
//! little-endian `u32`s, then ordered according to the requested case.
//! Nothing is cached; every call draws fresh bytes.

use rand::RngCore;

use crate::{error::AppResult, models::DatasetCase};

/// Generate a dataset from the thread-local entropy source
pub fn generate_dataset(size: usize, case: DatasetCase) -> Vec<u32> {
    generate_dataset_with(&mut rand::rng(), size, case)
}

/// Generate a dataset, parsing the case from its configuration name
pub fn generate_dataset_named(size: usize, case: &str) -> AppResult<Vec<u32>> {
    let case: DatasetCase = case.parse()?;
    Ok(generate_dataset(size, case))
}

/// Generate a dataset from an arbitrary entropy source
pub fn generate_dataset_with<R: RngCore + ?Sized>(
    rng: &mut R,
    size: usize,
    case: DatasetCase,
) -> Vec<u32> {
    let mut raw = vec![0u8; size * 4];
    rng.fill_bytes(&mut raw);

    let mut data: Vec<u32> = raw
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    match case {
        DatasetCase::Random => {}
        DatasetCase::Sorted => data.sort_unstable(),
        DatasetCase::Reversed => data.sort_unstable_by(|a, b| b.cmp(a)),
    }

    data
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_length_matches_size() {
        for size in [0, 1, 7, 1_000] {
            for case in [DatasetCase::Random, DatasetCase::Sorted, DatasetCase::Reversed] {
                assert_eq!(generate_dataset(size, case).len(), size);
                assert_eq!(generate_dataset(size, case).len(), size);
            }
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        assert!(generate_dataset(0, DatasetCase::Sorted).is_empty());
    }

    #[test]
    fn test_sorted_and_reversed_ordering() {
        let sorted = generate_dataset(100, DatasetCase::Sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let reversed = generate_dataset(100, DatasetCase::Reversed);
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_little_endian_decoding() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        let data = generate_dataset_with(&mut a, 3, DatasetCase::Random);

        let mut raw = [0u8; 12];
        b.fill_bytes(&mut raw);
        assert_eq!(data[0], u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]));
        assert_eq!(data[2], u32::from_le_bytes([raw[8], raw[9], raw[10], raw[11]]));
    }

    #[test]
    fn test_sorted_case_is_permutation_of_random() {
        let random = generate_dataset_with(&mut StdRng::seed_from_u64(42), 500, DatasetCase::Random);
        let sorted = generate_dataset_with(&mut StdRng::seed_from_u64(42), 500, DatasetCase::Sorted);

        let mut expected = random.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_named_case() {
        assert_eq!(generate_dataset_named(5, "reversed").unwrap().len(), 5);
        let err = generate_dataset_named(5, "shuffled").unwrap_err();
        assert!(matches!(err, AppError::InvalidCase(_)));
    }
}
