//! kstmart - browse the KST Mart product catalog from the terminal.
//!
//! Fetches the product list (cached for a few minutes, and on disk between
//! runs), then prints category summaries or the products of one category.

mod cli;
mod commands;
mod output;

use std::io;

use anyhow::Result;
use clap::Parser;
use kstmart_core::config::Config;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

/// Directory for rolling log files; unset means stderr only
const LOG_DIR_ENV: &str = "KSTMART_LOG_DIR";

/// Log file name prefix inside `KSTMART_LOG_DIR`
const LOG_FILE: &str = "kstmart.log";

/// Initialize the tracing subscriber for logging
fn init_tracing() -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_filter(filter());

    match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _log_guard = init_tracing();
    let cli = Cli::parse();
    info!("kstmart starting");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
    .with_env_overrides();
    debug!(?config, "Configuration loaded");

    // Ctrl+C cancels whatever fetch is in flight
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let cache = commands::build_cache(&cli, &config)?;
    commands::run(cli.command, &cache, &cancel).await
}
