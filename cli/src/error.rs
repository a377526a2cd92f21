//! CLI error handling
//!
//! Validation failures are the user's to fix and exit with code 2; anything
//! else is an operational failure and exits with code 1.

use health_calculator_shared::ValidationError;
use thiserror::Error;

/// Error type returned by every command
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            CliError::Config(_) | CliError::Serialization(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = CliError::from(ValidationError::MissingGender);
        assert_eq!(err.to_string(), "Please select your gender");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = CliError::from(config::ConfigError::Message("bad".into()));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
