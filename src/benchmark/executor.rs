//! Single-trial executor
//!
//! This is the only place where an algorithm failure becomes data. Errors
//! returned by the algorithm and panics raised inside it are both turned
//! into [`TrialResult::Failed`]; nothing escapes to the caller.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::{
    algorithms::SortFn,
    host::{Probe, resident_memory_bytes},
    models::TrialResult,
};

/// Executes one (algorithm, dataset) trial
#[derive(Debug, Clone, Copy)]
pub struct RunExecutor {
    verify_output: bool,
    memory_probe: Probe,
}

impl RunExecutor {
    /// Executor that verifies output and samples resident memory from the host
    pub fn new() -> Self {
        Self {
            verify_output: true,
            memory_probe: resident_memory_bytes,
        }
    }

    /// Enable or disable the post-sort order check
    pub fn with_verification(mut self, verify_output: bool) -> Self {
        self.verify_output = verify_output;
        self
    }

    /// Replace the resident-memory probe
    pub fn with_memory_probe(mut self, probe: Probe) -> Self {
        self.memory_probe = probe;
        self
    }

    /// Run `sort` on `dataset`, which the trial owns outright.
    ///
    /// When `measure_memory` is set, resident memory is sampled immediately
    /// before and after the call; if either sample is unavailable the delta
    /// is absent but the trial still succeeds.
    pub fn execute(&self, sort: SortFn, dataset: Vec<u32>, measure_memory: bool) -> TrialResult {
        let mut data = dataset;
        let input_len = data.len();

        let before = if measure_memory {
            (self.memory_probe)()
        } else {
            None
        };

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| sort(&mut data)));
        let time_s = start.elapsed().as_secs_f64();

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return TrialResult::failed(e.to_string()),
            Err(payload) => return TrialResult::failed(panic_message(payload.as_ref())),
        }

        let memory_delta = if measure_memory {
            let after = (self.memory_probe)();
            before.zip(after).and_then(|(before, after)| memory_delta(before, after))
        } else {
            None
        };

        if self.verify_output
            && let Err(message) = verify_sorted(&data, input_len)
        {
            return TrialResult::failed(message);
        }

        TrialResult::completed(time_s, memory_delta)
    }
}

impl Default for RunExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn memory_delta(before: u64, after: u64) -> Option<i64> {
    let before = i64::try_from(before).ok()?;
    let after = i64::try_from(after).ok()?;
    after.checked_sub(before)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked with a non-string payload".to_string()
    }
}

/// Check that `data` is non-decreasing and still holds `input_len` items
fn verify_sorted(data: &[u32], input_len: usize) -> Result<(), String> {
    if data.len() != input_len {
        return Err(format!(
            "output length {} does not match input length {}",
            data.len(),
            input_len
        ));
    }
    match data.windows(2).position(|w| w[0] > w[1]) {
        Some(index) => Err(format!("output is not sorted at index {}", index + 1)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{SortError, std_sort};

    fn fails(_: &mut Vec<u32>) -> Result<(), SortError> {
        Err(SortError::Failed("comparison budget exhausted".into()))
    }

    fn panics(_: &mut Vec<u32>) -> Result<(), SortError> {
        panic!("index out of bounds");
    }

    fn no_op(_: &mut Vec<u32>) -> Result<(), SortError> {
        Ok(())
    }

    fn truncates(data: &mut Vec<u32>) -> Result<(), SortError> {
        data.pop();
        Ok(())
    }

    fn fixed_memory() -> Option<u64> {
        Some(4096)
    }

    fn no_memory() -> Option<u64> {
        None
    }

    #[test]
    fn test_successful_trial() {
        let result = RunExecutor::new().execute(std_sort, vec![3, 1, 2], false);
        assert!(result.time().is_some_and(|t| t >= 0.0));
        assert!(result.error().is_none());
        assert!(result.memory_delta().is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let result = RunExecutor::new().execute(std_sort, Vec::new(), false);
        assert!(result.time().is_some_and(|t| t >= 0.0));
        assert!(result.error().is_none());
    }

    #[test]
    fn test_error_is_contained() {
        let result = RunExecutor::new().execute(fails, vec![1, 2], false);
        assert!(result.time().is_none());
        assert_eq!(result.error(), Some("comparison budget exhausted"));
    }

    #[test]
    fn test_panic_is_contained() {
        let result = RunExecutor::new().execute(panics, vec![1, 2], true);
        assert!(result.time().is_none());
        assert!(result.memory_delta().is_none());
        assert_eq!(result.error(), Some("panicked: index out of bounds"));
    }

    #[test]
    fn test_verification_catches_unsorted_output() {
        let result = RunExecutor::new().execute(no_op, vec![1, 3, 2], false);
        assert_eq!(result.error(), Some("output is not sorted at index 2"));

        let result = RunExecutor::new().execute(truncates, vec![1, 2, 3], false);
        assert_eq!(
            result.error(),
            Some("output length 2 does not match input length 3")
        );

        let unchecked = RunExecutor::new().with_verification(false);
        assert!(unchecked.execute(no_op, vec![1, 3, 2], false).is_success());
    }

    #[test]
    fn test_memory_delta_sampling() {
        let executor = RunExecutor::new().with_memory_probe(fixed_memory);
        assert_eq!(executor.execute(std_sort, vec![2, 1], true).memory_delta(), Some(0));
        assert_eq!(executor.execute(std_sort, vec![2, 1], false).memory_delta(), None);
    }

    #[test]
    fn test_memory_probe_failure_degrades() {
        let executor = RunExecutor::new().with_memory_probe(no_memory);
        let result = executor.execute(std_sort, vec![2, 1], true);
        assert!(result.is_success());
        assert!(result.memory_delta().is_none());
    }

    #[test]
    fn test_memory_delta_arithmetic() {
        assert_eq!(memory_delta(100, 50), Some(-50));
        assert_eq!(memory_delta(50, 100), Some(50));
        assert_eq!(memory_delta(u64::MAX, 0), None);
    }
}
