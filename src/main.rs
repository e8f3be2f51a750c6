//! Mini Cache - JSON-lines shell over an in-memory cache
//!
//! Reads one request per stdin line and answers on stdout. Logs go to stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::{shell, Config, Session};

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the configured cache
/// 4. Serve requests from stdin until it closes
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    if config.kind.is_bounded() {
        info!(
            "Configuration loaded: kind={}, capacity={}",
            config.kind, config.capacity
        );
    } else {
        info!("Configuration loaded: kind={}", config.kind);
    }

    let mut session = Session::from_config(&config)
        .with_context(|| format!("failed to build {} cache", config.kind))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut session, stdin.lock(), stdout.lock()).context("shell I/O failed")?;

    info!("Shell shutdown complete");
    Ok(())
}
