//! Error types for rankloss operations.
//!
//! Every loss entry point returns [`Result`]; caller input never panics.

use thiserror::Error;

/// Main error type for ranking loss operations.
///
/// # Examples
///
/// ```
/// use rankloss::error::RankLossError;
///
/// let err = RankLossError::InvalidInputShape { len: 5, group_size: 2 };
/// assert!(err.to_string().contains("multiple of 2"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankLossError {
    /// Score vector length is zero or not a multiple of the group size.
    #[error("Invalid input shape: length {len} is not a positive multiple of {group_size}")]
    InvalidInputShape {
        /// Length of the offending vector
        len: usize,
        /// Expected group size (`1 + neg_num`)
        group_size: usize,
    },

    /// Label and score vectors disagree in length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length (taken from `y_pred`)
        expected: usize,
        /// Actual length (taken from `y_true`)
        actual: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid config: {param} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Config could not be parsed or written.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RankLossError {
    /// Create an invalid-config error from displayable parts.
    #[must_use]
    pub fn invalid_config(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

impl From<serde_json::Error> for RankLossError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RankLossError>;
