//! Error types for windowed anomaly detection
//!
//! Provides a unified error type for all workspace crates.

use thiserror::Error;

/// Core error type for window, scorer and detector operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected configuration (window capacity, threshold, stream parameters)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A statistic was requested from a window holding no samples
    #[error("Empty window: {operation} requires at least one sample")]
    EmptyWindow { operation: &'static str },

    /// Scoring was requested before the window reached capacity
    #[error("Window not full: holds {len} of {capacity} samples")]
    WindowNotFull { len: usize, capacity: usize },

    /// IO error (for configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a statistic requested from an empty window
    pub fn empty_window(operation: &'static str) -> Self {
        Self::EmptyWindow { operation }
    }

    /// Create a configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// True for errors raised while validating configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Serialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("window_capacity must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: window_capacity must be positive"
        );

        let err = Error::empty_window("mean");
        assert_eq!(
            err.to_string(),
            "Empty window: mean requires at least one sample"
        );

        let err = Error::WindowNotFull { len: 3, capacity: 5 };
        assert_eq!(err.to_string(), "Window not full: holds 3 of 5 samples");
    }

    #[test]
    fn test_config_error_classification() {
        assert!(Error::invalid_config("bad").is_config_error());
        assert!(!Error::empty_window("stddev").is_config_error());

        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(Error::from(parse_err).is_config_error());
    }
}
