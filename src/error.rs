//! Custom error types and handling
//!
//! Configuration and I/O failures propagate as [`AppError`]. Algorithm
//! failures never do: the run executor turns them into trial data.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid dataset case: {0}")]
    InvalidCase(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Export errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm(_) => "UNKNOWN_ALGORITHM",
            Self::InvalidCase(_) => "INVALID_CASE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether this error was raised while validating a benchmark request,
    /// before any trial ran
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownAlgorithm(_)
                | Self::InvalidCase(_)
                | Self::InvalidInput(_)
                | Self::Configuration(_)
        )
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::UnknownAlgorithm("shellsort".into()).error_code(),
            "UNKNOWN_ALGORITHM"
        );
        assert_eq!(AppError::InvalidCase("zigzag".into()).error_code(), "INVALID_CASE");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(AppError::InvalidInput("repeats".into()).is_configuration());
        let io = AppError::from(std::io::Error::other("disk full"));
        assert!(!io.is_configuration());
        assert_eq!(io.error_code(), "IO_ERROR");
    }
}
