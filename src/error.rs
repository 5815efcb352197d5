//! Error types for the Alpha Nex desktop client

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error talking to the Alpha Nex server
    #[error("API error: {0}")]
    Api(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// UI error
    #[error("UI error: {0}")]
    Ui(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Config("missing settings file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing settings file");

        let err = AppError::Ui("window creation failed".to_string());
        assert_eq!(err.to_string(), "UI error: window creation failed");
    }

    #[test]
    fn test_from_string() {
        let err: AppError = "something went wrong".into();
        assert!(matches!(err, AppError::Other(_)));
        assert_eq!(err.to_string(), "something went wrong");
    }
}
