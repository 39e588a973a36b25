//! Property Counter - demo runner
//!
//! Runs the walkthrough scenarios and prints the resulting report as JSON.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use property_counter::{demo, Config};

/// Main entry point for the property counter demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Run every demo section
/// 4. Print the report to stdout as pretty JSON
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_counter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Property Counter demo");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: parallel_threshold={}, worker_threads={}, demo_size={}",
        config.parallel_threshold, config.worker_threads, config.demo_size
    );

    let report = demo::run(&config).context("demo run failed")?;
    info!("Demo completed: {} sections", report.sections.len());

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
