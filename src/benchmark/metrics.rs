//! Per-cell metrics collection

use crate::models::TrialResult;

/// Collects the trials of one (algorithm, size) cell and reduces them
#[derive(Debug, Default)]
pub struct MetricsCollector {
    times: Vec<f64>,
    mems: Vec<f64>,
    errors: Vec<String>,
}

/// Reduced metrics for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellSummary {
    /// Mean time over successful trials, in seconds
    pub avg_time: Option<f64>,
    /// Mean memory delta over trials that reported one, in bytes
    pub avg_mem: Option<f64>,
    /// Failure messages, in trial order
    pub errors: Vec<String>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trial
    pub fn add_trial(&mut self, trial: TrialResult) {
        match trial {
            TrialResult::Completed {
                time_s,
                memory_delta,
            } => {
                self.times.push(time_s);
                if let Some(delta) = memory_delta {
                    self.mems.push(delta as f64);
                }
            }
            TrialResult::Failed { error } => self.errors.push(error),
        }
    }

    /// Get number of trials recorded
    pub fn trial_count(&self) -> usize {
        self.times.len() + self.errors.len()
    }

    pub fn success_count(&self) -> usize {
        self.times.len()
    }

    /// Reduce to arithmetic means, skipping failed trials
    pub fn summarize(self) -> CellSummary {
        CellSummary {
            avg_time: mean(&self.times),
            avg_mem: mean(&self.mems),
            errors: self.errors,
        }
    }
}

/// Arithmetic mean, absent for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0]), Some(2.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_failed_trials_are_skipped() {
        let mut collector = MetricsCollector::new();
        collector.add_trial(TrialResult::completed(1.0, Some(100)));
        collector.add_trial(TrialResult::failed("first"));
        collector.add_trial(TrialResult::completed(3.0, Some(-50)));
        collector.add_trial(TrialResult::failed("second"));

        assert_eq!(collector.trial_count(), 4);
        assert_eq!(collector.success_count(), 2);

        let summary = collector.summarize();
        assert_eq!(summary.avg_time, Some(2.0));
        assert_eq!(summary.avg_mem, Some(25.0));
        assert_eq!(summary.errors, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_memory_mean_only_over_reported_deltas() {
        let mut collector = MetricsCollector::new();
        collector.add_trial(TrialResult::completed(1.0, None));
        collector.add_trial(TrialResult::completed(1.0, Some(64)));

        let summary = collector.summarize();
        assert_eq!(summary.avg_mem, Some(64.0));
    }

    #[test]
    fn test_all_failed() {
        let mut collector = MetricsCollector::new();
        collector.add_trial(TrialResult::failed("x"));

        let summary = collector.summarize();
        assert_eq!(summary.avg_time, None);
        assert_eq!(summary.avg_mem, None);
        assert_eq!(summary.errors.len(), 1);
    }
}
