//! SortBench - Application Entry Point
//!
//! Loads configuration from the environment, runs the benchmark, prints the
//! result table and writes the configured exports.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{
    Aggregator, AlgorithmRegistry, Config, RunExecutor, SizeEstimator,
    host::HostInfo,
    render_table, save_csv, save_json,
    utils::{format_bytes, now_local},
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let started_at = now_local();
    tracing::info!("Starting SortBench at {}", started_at.format("%Y-%m-%d %H:%M:%S"));

    let host = HostInfo::probe();
    tracing::info!(
        cpus = host.cpu_count,
        processes = ?host.process_count,
        "Host memory: {}",
        host.total_memory_bytes
            .map(|bytes| format_bytes(bytes as f64))
            .unwrap_or_else(|| "unknown".to_string())
    );

    let request = config.request(&SizeEstimator::new());
    let executor = RunExecutor::new().with_verification(config.benchmark.verify_output);
    let aggregator = Aggregator::new(AlgorithmRegistry::builtin()).with_executor(executor);

    let results = aggregator.run_request(&request)?;

    println!("{}", render_table(&results));

    let paths = config.output.paths(started_at);
    if let Some(path) = &paths.csv {
        save_csv(&results, path)?;
        tracing::info!("Wrote CSV results to {}", path.display());
    }
    if let Some(path) = &paths.json {
        save_json(&results, path)?;
        tracing::info!("Wrote JSON results to {}", path.display());
    }

    let elapsed = now_local() - started_at;
    tracing::info!(
        "Benchmark finished in {:.2}s",
        elapsed.num_milliseconds() as f64 / 1000.0
    );

    Ok(())
}
