//! Error types for exacto

use thiserror::Error;

/// Result type alias for exacto operations
pub type ExactoResult<T> = Result<T, ExactoError>;

/// Errors that can occur while constructing or running conformance cases
#[derive(Debug, Error)]
pub enum ExactoError {
    /// Invalid kernel configuration: bad shape, non-positive scale, or a
    /// size mismatch between declared and actual buffer lengths. Always
    /// raised before any arithmetic executes.
    #[error("configuration error: {0}")]
    Config(String),

    /// Fixture registry lookup or construction failure
    #[error("fixture error: {0}")]
    Fixture(String),

    /// I/O error while emitting reports
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExactoError {
    /// Shorthand for a configuration error with a formatted message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExactoError::config("scale must be positive");
        assert_eq!(
            err.to_string(),
            "configuration error: scale must be positive"
        );
    }

    #[test]
    fn test_fixture_error_display() {
        let err = ExactoError::Fixture("no case named conv_9".into());
        assert_eq!(err.to_string(), "fixture error: no case named conv_9");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ExactoError::from(io);
        assert!(matches!(err, ExactoError::Io(_)));
    }
}
