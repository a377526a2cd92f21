//! Configuration management for the health calculator CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HC__)

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;

use health_calculator_shared::units::UnitSystem;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Calculator defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Unit system used when `--units` is not given
    pub default_unit_system: UnitSystem,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the pretty format
    pub json: bool,
    /// `EnvFilter` directives used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: "health_calculator_cli=warn,health_calculator_shared=warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HC__ prefix
    pub fn load() -> Result<Self, ConfigError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_from(&format!("config/{}.toml", env))
    }

    /// Load configuration with an explicit file in place of the RUST_ENV one
    pub fn load_from(config_file: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(File::new(config_file, FileFormat::Toml).required(false))
            // e.g., HC__OUTPUT__FORMAT=json sets output.format
            .add_source(Environment::with_prefix("HC").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.calculator.default_unit_system, UnitSystem::Metric);
        assert!(!config.logging.json);
        assert!(config.logging.filter.contains("health_calculator_cli=warn"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from("config/does-not-exist.toml").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.calculator.default_unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
