//! Error types for anchor-linalg

use thiserror::Error;

/// Result type alias using anchor-linalg's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reduction operations
///
/// Every error is raised synchronously during validation, before any input
/// element is read. No partial results are ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Feature not yet implemented
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },

    /// Generic internal error (e.g. the worker pool could not be started)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a not-implemented error
    pub fn not_implemented(feature: &'static str) -> Self {
        Self::NotImplemented { feature }
    }

    /// Returns true for [`Error::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true for [`Error::NotImplemented`]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("num_threads", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'num_threads': must be at least 1, got 0"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_not_implemented());
    }

    #[test]
    fn test_not_implemented_message() {
        let err = Error::not_implemented("compensated reduction");
        assert_eq!(err.to_string(), "Not implemented: compensated reduction");
        assert!(err.is_not_implemented());
    }
}
