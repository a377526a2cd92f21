//! Health Calculator CLI
//!
//! Computes BMI, BMR and daily calorie needs from the same form fields the
//! clinic page uses, and accepts appointment requests.

use anyhow::Result;
use clap::Parser;
use health_calculator_cli::cli::Cli;
use health_calculator_cli::commands;
use health_calculator_cli::config::{AppConfig, LoggingConfig};
use health_calculator_cli::error::CliError;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(&path.to_string_lossy())?,
        None => AppConfig::load()?,
    };

    init_tracing(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting health calculator"
    );

    match commands::run(&cli, &config) {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(CliError::Validation(err)) => {
            info!(field = err.field(), "Input rejected");
            eprintln!("{}", err);
            Ok(ExitCode::from(CliError::Validation(err).exit_code()))
        }
        Err(err) => {
            error!("Command failed: {}", err);
            Err(err.into())
        }
    }
}

/// Initialize tracing/logging
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json || AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
