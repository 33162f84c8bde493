//! Dataset size estimation from host resources

use crate::constants::{DEFAULT_MEMORY_DERIVED_SIZE, DEFAULT_PROCESS_DERIVED_SIZE};

use super::probes::{PROCESS_COUNT_PROBES, Probe, TOTAL_MEMORY_PROBES, first_available};

/// Derives dataset sizes from host signals
///
/// Probe chains are injectable so each fallback step can be exercised on
/// its own; [`SizeEstimator::new`] uses the real host probes.
#[derive(Debug, Clone)]
pub struct SizeEstimator {
    memory_probes: Vec<Probe>,
    process_probes: Vec<Probe>,
}

impl SizeEstimator {
    /// Estimator backed by the host probes
    pub fn new() -> Self {
        Self {
            memory_probes: TOTAL_MEMORY_PROBES.to_vec(),
            process_probes: PROCESS_COUNT_PROBES.to_vec(),
        }
    }

    /// Replace the total-memory probe chain
    pub fn with_memory_probes(mut self, probes: &[Probe]) -> Self {
        self.memory_probes = probes.to_vec();
        self
    }

    /// Replace the process-count probe chain
    pub fn with_process_probes(mut self, probes: &[Probe]) -> Self {
        self.process_probes = probes.to_vec();
        self
    }

    /// `max(1, floor(total_bytes * fraction / bytes_per_item))`, or
    /// [`DEFAULT_MEMORY_DERIVED_SIZE`] when total memory is unknown.
    ///
    /// A non-positive or non-finite `fraction`, or a zero `bytes_per_item`,
    /// yields 1.
    pub fn size_from_memory_fraction(&self, fraction: f64, bytes_per_item: u64) -> usize {
        match first_available("total memory", &self.memory_probes) {
            Some(total_bytes) => items_for_bytes(total_bytes, fraction, bytes_per_item),
            None => {
                tracing::debug!(
                    fallback = DEFAULT_MEMORY_DERIVED_SIZE,
                    "Total memory unavailable, using default dataset size"
                );
                DEFAULT_MEMORY_DERIVED_SIZE
            }
        }
    }

    /// `max(1, process_count * multiplier)`, or
    /// [`DEFAULT_PROCESS_DERIVED_SIZE`] when the process count is unknown.
    pub fn size_from_proc_process_count(&self, multiplier: usize) -> usize {
        match first_available("process count", &self.process_probes) {
            Some(count) => usize::try_from(count)
                .unwrap_or(usize::MAX)
                .saturating_mul(multiplier)
                .max(1),
            None => {
                tracing::debug!(
                    fallback = DEFAULT_PROCESS_DERIVED_SIZE,
                    "Process count unavailable, using default dataset size"
                );
                DEFAULT_PROCESS_DERIVED_SIZE
            }
        }
    }
}

impl Default for SizeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Dataset size from a fraction of total host memory, using the host probes
pub fn size_from_memory_fraction(fraction: f64, bytes_per_item: u64) -> usize {
    SizeEstimator::new().size_from_memory_fraction(fraction, bytes_per_item)
}

/// Dataset size from the host process count, using the host probes
pub fn size_from_proc_process_count(multiplier: usize) -> usize {
    SizeEstimator::new().size_from_proc_process_count(multiplier)
}

fn items_for_bytes(total_bytes: u64, fraction: f64, bytes_per_item: u64) -> usize {
    if bytes_per_item == 0 || !fraction.is_finite() || fraction <= 0.0 {
        return 1;
    }

    let items = (total_bytes as f64 * fraction / bytes_per_item as f64).floor();
    // float-to-int `as` saturates
    (items as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BYTES_PER_ITEM;

    fn unavailable() -> Option<u64> {
        None
    }
    fn eight_gib() -> Option<u64> {
        Some(8 * 1024 * 1024 * 1024)
    }
    fn four_kib() -> Option<u64> {
        Some(4096)
    }
    fn two_hundred() -> Option<u64> {
        Some(200)
    }

    #[test]
    fn test_memory_fraction_primary_probe() {
        let estimator = SizeEstimator::new().with_memory_probes(&[four_kib, eight_gib]);
        // 4096 * 0.5 / 4
        assert_eq!(estimator.size_from_memory_fraction(0.5, 4), 512);
    }

    #[test]
    fn test_memory_fraction_falls_through_to_second_probe() {
        let estimator = SizeEstimator::new().with_memory_probes(&[unavailable, eight_gib]);
        assert_eq!(
            estimator.size_from_memory_fraction(0.001, 4),
            (8.0 * 1024.0 * 1024.0 * 1024.0 * 0.001 / 4.0_f64).floor() as usize
        );
    }

    #[test]
    fn test_memory_fraction_default_when_all_probes_fail() {
        let estimator = SizeEstimator::new().with_memory_probes(&[unavailable, unavailable]);
        assert_eq!(
            estimator.size_from_memory_fraction(0.5, 4),
            DEFAULT_MEMORY_DERIVED_SIZE
        );
    }

    #[test]
    fn test_memory_fraction_clamps_to_one() {
        let estimator = SizeEstimator::new().with_memory_probes(&[four_kib]);
        assert_eq!(estimator.size_from_memory_fraction(1e-12, 4), 1);
        assert_eq!(estimator.size_from_memory_fraction(0.0, 4), 1);
        assert_eq!(estimator.size_from_memory_fraction(-1.0, 4), 1);
        assert_eq!(estimator.size_from_memory_fraction(f64::NAN, 4), 1);
        assert_eq!(estimator.size_from_memory_fraction(0.5, 0), 1);
    }

    #[test]
    fn test_process_count() {
        let estimator = SizeEstimator::new().with_process_probes(&[unavailable, two_hundred]);
        assert_eq!(estimator.size_from_proc_process_count(10), 2_000);
        assert_eq!(estimator.size_from_proc_process_count(0), 1);
    }

    #[test]
    fn test_process_count_default() {
        let estimator = SizeEstimator::new().with_process_probes(&[unavailable]);
        assert_eq!(
            estimator.size_from_proc_process_count(10),
            DEFAULT_PROCESS_DERIVED_SIZE
        );
    }

    #[test]
    fn test_host_estimates_never_zero() {
        assert!(size_from_memory_fraction(0.0001, DEFAULT_BYTES_PER_ITEM) >= 1);
        assert!(size_from_proc_process_count(1) >= 1);
    }
}
