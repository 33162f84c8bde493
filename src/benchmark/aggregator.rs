//! Benchmark aggregation
//!
//! Drives the nested loop: algorithm (outer), size (middle), repeat (inner).
//! Every repeat gets a freshly generated dataset and goes through the
//! [`RunExecutor`]; each (algorithm, size) cell is reduced to arithmetic
//! means and recorded, even when every repeat failed.

use tracing::{debug, info, warn};

use crate::{
    algorithms::AlgorithmRegistry,
    dataset::generate_dataset,
    error::{AppError, AppResult},
    models::{AlgorithmResult, DatasetCase, ResultSet},
};

use super::{executor::RunExecutor, metrics::MetricsCollector};

/// Produces the dataset for one repeat
pub type DatasetSource = fn(usize, DatasetCase) -> Vec<u32>;

/// Parameters of one benchmark invocation
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRequest {
    pub sizes: Vec<usize>,
    pub case: DatasetCase,
    pub algorithms: Vec<String>,
    pub repeats: u32,
    pub measure_memory: bool,
}

/// Runs algorithms over sizes and repeats, reducing to a [`ResultSet`]
#[derive(Debug, Clone)]
pub struct Aggregator {
    registry: AlgorithmRegistry,
    executor: RunExecutor,
    dataset_source: DatasetSource,
}

impl Aggregator {
    /// Create an aggregator over `registry` with the default executor
    pub fn new(registry: AlgorithmRegistry) -> Self {
        Self {
            registry,
            executor: RunExecutor::new(),
            dataset_source: generate_dataset,
        }
    }

    pub fn with_executor(mut self, executor: RunExecutor) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_dataset_source(mut self, source: DatasetSource) -> Self {
        self.dataset_source = source;
        self
    }

    /// Run a full benchmark.
    ///
    /// Algorithm names are resolved and `repeats` is checked before any
    /// dataset is generated; either failure aborts the whole invocation.
    /// Algorithm failures never do: they are recorded per cell.
    pub fn run<S: AsRef<str>>(
        &self,
        sizes: &[usize],
        case: DatasetCase,
        algorithm_names: &[S],
        repeats: u32,
        measure_memory: bool,
    ) -> AppResult<ResultSet> {
        let algorithms = self.registry.resolve(algorithm_names)?;
        if repeats == 0 {
            return Err(AppError::InvalidInput(
                "repeats must be at least 1".to_string(),
            ));
        }

        info!(
            algorithms = algorithms.len(),
            sizes = ?sizes,
            case = %case,
            repeats,
            measure_memory,
            "Starting benchmark"
        );

        let mut results = ResultSet::new();

        for (name, sort) in &algorithms {
            let mut algorithm_result = AlgorithmResult::with_capacity(sizes.len());

            for &size in sizes {
                let mut collector = MetricsCollector::new();

                for repeat in 0..repeats {
                    let dataset = (self.dataset_source)(size, case);
                    let trial = self.executor.execute(*sort, dataset, measure_memory);

                    match trial.error() {
                        None => debug!(
                            algorithm = %name,
                            size,
                            repeat,
                            time_s = trial.time(),
                            memory_delta = trial.memory_delta(),
                            "Trial completed"
                        ),
                        Some(error) => warn!(
                            algorithm = %name,
                            size,
                            repeat,
                            error,
                            "Trial failed"
                        ),
                    }

                    collector.add_trial(trial);
                }

                let successes = collector.success_count();
                let summary = collector.summarize();

                info!(
                    algorithm = %name,
                    size,
                    successes,
                    failures = summary.errors.len(),
                    avg_time_s = summary.avg_time,
                    avg_mem_bytes = summary.avg_mem,
                    "Cell complete"
                );

                algorithm_result.push(size, summary.avg_time, summary.avg_mem, summary.errors);
            }

            results.insert(name.clone(), algorithm_result);
        }

        Ok(results)
    }

    /// Run with the case given by its configuration name
    pub fn run_named<S: AsRef<str>>(
        &self,
        sizes: &[usize],
        case: &str,
        algorithm_names: &[S],
        repeats: u32,
        measure_memory: bool,
    ) -> AppResult<ResultSet> {
        let case: DatasetCase = case.parse()?;
        self.run(sizes, case, algorithm_names, repeats, measure_memory)
    }

    /// Run a [`BenchmarkRequest`]
    pub fn run_request(&self, request: &BenchmarkRequest) -> AppResult<ResultSet> {
        self.run(
            &request.sizes,
            request.case,
            &request.algorithms,
            request.repeats,
            request.measure_memory,
        )
    }

    /// One dataset size, one repeat, no memory sampling
    pub fn run_once<S: AsRef<str>>(
        &self,
        size: usize,
        case: DatasetCase,
        algorithm_names: &[S],
    ) -> AppResult<ResultSet> {
        self.run(&[size], case, algorithm_names, 1, false)
    }
}
