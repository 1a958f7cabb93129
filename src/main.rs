//! element-inspector - headless element inspector
//!
//! Command-line entry point over recorded DOM snapshots.

mod cli;
mod commands;

use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use inspector_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::Cli;
use crate::commands::handle_command;

/// Initialize tracing with console output and, when configured, a daily
/// rolling log file.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // stdout carries command output
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(true);

    let file = match logging.file_dir {
        Some(ref dir) => {
            let dir = ConfigLoader::expand_path(&dir.to_string_lossy());
            std::fs::create_dir_all(&dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("element-inspector")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the worker alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false).boxed())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

/// Load the configuration file. An explicit path must exist; the default
/// location falls back to built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in &warnings {
        warn!(field = %warning.path, "{}", warning.message);
    }
    debug!(template = %config.prompt.template, "Configuration loaded");

    handle_command(cli.command, &config).await
}
