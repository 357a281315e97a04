//! Error types for Event Easy

use thiserror::Error;

/// Main error type for Event Easy operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A background cycle needs at least one image to rotate through
    #[error("Image sequence is empty")]
    EmptyImageSequence,

    /// A periodic task was configured with a zero-length period
    #[error("Invalid period: {0:?}")]
    InvalidPeriod(std::time::Duration),

    /// The host platform refused to open an external URL
    #[error("Failed to open link: {0}")]
    LinkOpen(String),

    /// The global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using the Event Easy error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyImageSequence.to_string(), "Image sequence is empty");
        let err = Error::LinkOpen("https://example.com".to_string());
        assert_eq!(format!("{}", err), "Failed to open link: https://example.com");
    }
}
