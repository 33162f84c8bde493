//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before any benchmark runs.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::{
    benchmark::BenchmarkRequest,
    constants::{
        DEFAULT_BYTES_PER_ITEM, DEFAULT_LOG_LEVEL, DEFAULT_MEMORY_FRACTION,
        DEFAULT_PROCESS_MULTIPLIER, DEFAULT_REPEATS, DEFAULT_SIZES, algorithms, size_modes,
    },
    host::SizeEstimator,
    models::DatasetCase,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub benchmark: BenchmarkConfig,
    pub sizing: SizingConfig,
    pub output: OutputConfig,
    pub log_level: String,
}

/// What to run and how
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub case: DatasetCase,
    pub algorithms: Vec<String>,
    pub repeats: u32,
    pub measure_memory: bool,
    /// Check every completed trial's output is sorted
    pub verify_output: bool,
}

/// How dataset sizes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Use the configured size list as-is
    #[default]
    Explicit,
    /// One size derived from total host memory
    Memory,
    /// One size derived from the host process count
    Processes,
}

impl FromStr for SizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            size_modes::EXPLICIT => Ok(SizeMode::Explicit),
            size_modes::MEMORY => Ok(SizeMode::Memory),
            size_modes::PROCESSES => Ok(SizeMode::Processes),
            _ => Err(format!(
                "'{}' (expected one of: {})",
                s,
                size_modes::ALL.join(", ")
            )),
        }
    }
}

/// Dataset sizing configuration
#[derive(Debug, Clone)]
pub struct SizingConfig {
    pub mode: SizeMode,
    pub sizes: Vec<usize>,
    pub memory_fraction: f64,
    pub bytes_per_item: u64,
    pub process_multiplier: usize,
}

/// Export destinations
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    /// Directory for timestamped exports when no explicit path is given
    pub output_dir: Option<PathBuf>,
}

/// Export paths after defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            benchmark: BenchmarkConfig::from_lookup(&lookup)?,
            sizing: SizingConfig::from_lookup(&lookup)?,
            output: OutputConfig::from_lookup(&lookup),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Build the benchmark request, resolving sizes against the host
    pub fn request(&self, estimator: &SizeEstimator) -> BenchmarkRequest {
        BenchmarkRequest {
            sizes: self.sizing.resolve(estimator),
            case: self.benchmark.case,
            algorithms: self.benchmark.algorithms.clone(),
            repeats: self.benchmark.repeats,
            measure_memory: self.benchmark.measure_memory,
        }
    }
}

impl BenchmarkConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let algorithms = match lookup("BENCH_ALGORITHMS") {
            Some(raw) => parse_list("BENCH_ALGORITHMS", &raw, |item| Ok(item.to_string()))?,
            None => algorithms::DEFAULT.iter().map(|name| name.to_string()).collect(),
        };

        let repeats = parse_or("BENCH_REPEATS", lookup, DEFAULT_REPEATS)?;
        if repeats == 0 {
            return Err(ConfigError::InvalidValue("BENCH_REPEATS".to_string()));
        }

        Ok(Self {
            case: parse_or("BENCH_CASE", lookup, DatasetCase::default())?,
            algorithms,
            repeats,
            measure_memory: parse_flag("BENCH_MEASURE_MEMORY", lookup, false)?,
            verify_output: parse_flag("BENCH_VERIFY_OUTPUT", lookup, true)?,
        })
    }
}

impl SizingConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let sizes = match lookup("BENCH_SIZES") {
            Some(raw) => parse_list("BENCH_SIZES", &raw, |item| item.parse().map_err(|_| ()))?,
            None => DEFAULT_SIZES.to_vec(),
        };

        let memory_fraction: f64 = parse_or("BENCH_MEMORY_FRACTION", lookup, DEFAULT_MEMORY_FRACTION)?;
        if !memory_fraction.is_finite() || memory_fraction <= 0.0 || memory_fraction > 1.0 {
            return Err(ConfigError::InvalidValue("BENCH_MEMORY_FRACTION".to_string()));
        }

        Ok(Self {
            mode: parse_or("BENCH_SIZE_MODE", lookup, SizeMode::default())?,
            sizes,
            memory_fraction,
            bytes_per_item: parse_or("BENCH_BYTES_PER_ITEM", lookup, DEFAULT_BYTES_PER_ITEM)?,
            process_multiplier: parse_or(
                "BENCH_PROCESS_MULTIPLIER",
                lookup,
                DEFAULT_PROCESS_MULTIPLIER,
            )?,
        })
    }

    /// Dataset sizes for this run
    pub fn resolve(&self, estimator: &SizeEstimator) -> Vec<usize> {
        match self.mode {
            SizeMode::Explicit => self.sizes.clone(),
            SizeMode::Memory => {
                vec![estimator.size_from_memory_fraction(self.memory_fraction, self.bytes_per_item)]
            }
            SizeMode::Processes => {
                vec![estimator.size_from_proc_process_count(self.process_multiplier)]
            }
        }
    }
}

impl OutputConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            csv_path: path("BENCH_CSV_PATH"),
            json_path: path("BENCH_JSON_PATH"),
            output_dir: path("BENCH_OUTPUT_DIR"),
        }
    }

    /// Resolve export paths, naming unset ones after `started_at` when an
    /// output directory is configured
    pub fn paths(&self, started_at: DateTime<Local>) -> OutputPaths {
        let stamp = started_at.format("%Y%m%d-%H%M%S").to_string();
        let in_dir = |dir: &Path, extension: &str| dir.join(format!("results-{}.{}", stamp, extension));

        OutputPaths {
            csv: self
                .csv_path
                .clone()
                .or_else(|| self.output_dir.as_deref().map(|dir| in_dir(dir, "csv"))),
            json: self
                .json_path
                .clone()
                .or_else(|| self.output_dir.as_deref().map(|dir| in_dir(dir, "json"))),
        }
    }
}

fn parse_or<T: FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

fn parse_flag(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(key).map(|raw| raw.trim().to_lowercase()) {
        None => Ok(default),
        Some(raw) => match raw.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key.to_string())),
        },
    }
}

/// Parse a comma-separated list, ignoring blank items. An empty list is invalid.
fn parse_list<T>(
    key: &str,
    raw: &str,
    parse: impl Fn(&str) -> Result<T, ()>,
) -> Result<Vec<T>, ConfigError> {
    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse(item).map_err(|_| ConfigError::InvalidValue(key.to_string())))
        .collect::<Result<Vec<T>, ConfigError>>()?;

    if items.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(items)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
