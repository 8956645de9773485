//! Error types for rapid_summary
//!
//! This module defines the error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for rapid_summary
#[derive(Error, Debug, Clone)]
pub enum SummaryError {
    /// PageRank did not converge within the maximum iterations
    #[error("Convergence failure after {iterations} iterations (delta={delta:.6})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A configuration resource (e.g. a stopword file) could not be loaded
    #[error("Configuration error for {}: {message}", path.display())]
    Configuration { path: PathBuf, message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummaryError {
    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a configuration resource error
    pub fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates non-convergence
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::invalid_config("alpha out of range");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("alpha out of range"));

        let err = SummaryError::convergence_failure(100, 0.001);
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.to_string().contains("0.001"));
    }

    #[test]
    fn test_configuration_display_includes_path() {
        let err = SummaryError::configuration("/tmp/stopwords.txt", "not found");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/stopwords.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_is_convergence_failure() {
        let err = SummaryError::convergence_failure(100, 0.001);
        assert!(err.is_convergence_failure());

        let err = SummaryError::invalid_config("test");
        assert!(!err.is_convergence_failure());
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{bad");
        let err: SummaryError = parse.unwrap_err().into();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }
}
