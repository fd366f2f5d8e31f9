//! Error types for hashparam

use thiserror::Error;

/// Main error type for hashparam
#[derive(Error, Debug)]
pub enum HashParamError {
    // ============ Store Errors ============
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ============ Location Errors ============
    #[error("History commit failed: {0}")]
    CommitFailure(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    // ============ Configuration Errors ============
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ============ General Errors ============
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for HashParamError {
    fn from(err: std::io::Error) -> Self {
        HashParamError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for HashParamError {
    fn from(err: serde_json::Error) -> Self {
        HashParamError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HashParamError::InvalidArgument("value is not a sequence".to_string());
        assert_eq!(err.to_string(), "Invalid argument: value is not a sequence");

        let err = HashParamError::CommitFailure("blocked".to_string());
        assert_eq!(err.to_string(), "History commit failed: blocked");
    }

    #[test]
    fn test_json_error_maps_to_config_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HashParamError = json_err.into();
        assert!(matches!(err, HashParamError::ConfigError(_)));
    }
}
