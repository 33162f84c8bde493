//! Benchmark execution engine
//!
//! - [`RunExecutor`] runs one trial and contains any algorithm failure.
//! - [`MetricsCollector`] reduces the trials of one (algorithm, size) cell.
//! - [`Aggregator`] drives algorithms × sizes × repeats into a
//!   [`ResultSet`](crate::models::ResultSet).

pub mod aggregator;
pub mod executor;
pub mod metrics;

pub use aggregator::{Aggregator, BenchmarkRequest, DatasetSource};
pub use executor::RunExecutor;
pub use metrics::{CellSummary, MetricsCollector};
