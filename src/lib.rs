//! SortBench - Sorting Algorithm Benchmark Engine
//!
//! This library runs a fixed catalogue of in-memory sorting algorithms over
//! generated integer datasets and reports averaged wall-clock time, resident
//! memory delta and per-trial failures.
//!
//! # Features
//!
//! - Built-in quadratic, comparison, radix and counting sorts behind one registry
//! - Random, sorted and reversed datasets from raw entropy
//! - Dataset sizes from an explicit list, host memory or host process count
//! - Per-trial failure isolation, including panics
//! - CSV and JSON export, with JSON reload
//!
//! # Architecture
//!
//! - **Host**: size estimation and resident-memory probes
//! - **Algorithms**: sorting functions and the name registry
//! - **Benchmark**: per-trial execution and aggregation into results
//! - **Store / Report**: exports and the console table
//! - **Models**: trial and result types

pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod host;
pub mod models;
pub mod report;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use algorithms::{AlgorithmRegistry, SortError, SortFn};
pub use benchmark::{Aggregator, BenchmarkRequest, RunExecutor};
pub use config::Config;
pub use dataset::generate_dataset;
pub use error::{AppError, AppResult};
pub use host::SizeEstimator;
pub use models::{AlgorithmResult, DatasetCase, ResultSet, TrialResult};
pub use report::render_table;
pub use store::{load_json, save_csv, save_json};
