//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during logging initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_failed_message() {
        let err = ObservabilityError::InitFailed("already set".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: already set");
    }

    #[test]
    fn test_config_message() {
        let err = ObservabilityError::Config("bad filter".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad filter");
    }
}
