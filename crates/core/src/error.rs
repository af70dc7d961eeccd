//! Error types for palletize.

use thiserror::Error;

/// Result type alias for palletize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating stackings or computing packaging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A factorization target is not a positive integer.
    #[error("Invalid count: {0}")]
    InvalidCount(String),

    /// Nesting counts, stacking factors, dimensions or pallet settings are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidCount("count must be at least 1, got 0".into());
        assert_eq!(err.to_string(), "Invalid count: count must be at least 1, got 0");

        let err = Error::InvalidConfiguration("units_per_inner must be at least 1".into());
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }
}
