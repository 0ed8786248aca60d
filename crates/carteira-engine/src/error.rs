//! Error types for the allocation engine.
//!
//! Report computation itself never fails: degenerate denominators and
//! malformed values are absorbed locally. Errors only arise when building
//! inputs (builders, JSON decoding).

use thiserror::Error;

/// Result type for engine operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while constructing engine inputs.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{id}': {reason}")]
    InvalidHolding {
        /// The holding ID.
        id: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid snapshot data.
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// The reason the snapshot is invalid.
        reason: String,
    },

    /// Unknown asset category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid snapshot error.
    #[must_use]
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing_field("id");
        assert!(err.to_string().contains("id"));

        let err = PortfolioError::invalid_holding("PETR4", "quantity is NaN");
        assert!(err.to_string().contains("PETR4"));
        assert!(err.to_string().contains("quantity is NaN"));

        let err = PortfolioError::UnknownCategory("bonds".into());
        assert_eq!(err.to_string(), "Unknown category: bonds");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: PortfolioError = parse.unwrap_err().into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
