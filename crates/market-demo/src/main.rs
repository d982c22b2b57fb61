//! Marketplace demo entry point
//!
//! Run with:
//! ```bash
//! cargo run -p market-demo
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).
//! The report is printed to stdout, logs go to stderr.

use market_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(err) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {err}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(&config) {
        error!(error = %e, "Demo failed");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        worker_id = config.snowflake.worker_id,
        "Configuration loaded"
    );

    let report = market_demo::run(config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Demo finished");
    Ok(())
}
