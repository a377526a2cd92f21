//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use clap::Parser;
use health_calculator_cli::cli::Cli;
use health_calculator_cli::commands;
use health_calculator_cli::config::AppConfig;
use health_calculator_cli::error::CliError;
use std::path::PathBuf;

/// Parse a command line the way the binary does
pub fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("health-calc").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("command line should parse")
}

/// Parse and run a command line against default configuration
pub fn run(args: &[&str]) -> Result<String, CliError> {
    commands::run(&parse(args), &AppConfig::default())
}

/// Write a throwaway TOML config file and return its path
pub fn write_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("health-calc-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("temp config should be writable");
    path
}
