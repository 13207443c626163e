use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use vendor_desk::cli::Cli;
use vendor_desk::logging::init_tracing;
use vendor_desk::remote::HttpVendorStore;
use vendor_desk::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    // Fail before the terminal is touched so the message stays readable
    let config = cli
        .resolve_config()
        .with_context(|| format!("Invalid configuration ({})", config_path.display()))?;

    let log_path = config.log_path();
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    tracing::info!(config = %config_path.display(), "vendor-desk starting");

    let store = HttpVendorStore::new(&config.remote).context("Failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("vendor-desk-io")
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let outcome = ui::runtime::run(&config, store, &runtime);

    // In-flight requests are abandoned on exit
    runtime.shutdown_timeout(Duration::from_millis(500));
    outcome.context("Terminal UI failed")
}
