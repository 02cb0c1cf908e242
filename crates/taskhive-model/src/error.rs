//! Error types for interpreting raw model values.

use thiserror::Error;

/// A specialized Result type for model value parsing.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when interpreting raw strings as model values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An unrecognized priority value was supplied.
    #[error("unknown priority: {value} (expected Low, Normal, or High)")]
    UnknownPriority {
        /// The value that could not be interpreted.
        value: String,
    },

    /// An unrecognized status value was supplied.
    #[error("unknown status: {value} (expected Pending, In Progress, or Completed)")]
    UnknownStatus {
        /// The value that could not be interpreted.
        value: String,
    },

    /// An unrecognized view filter was supplied.
    #[error("unknown view filter: {value} (expected today, upcoming, completed, or all)")]
    UnknownViewFilter {
        /// The value that could not be interpreted.
        value: String,
    },
}

impl ModelError {
    /// Creates an unknown priority error.
    pub fn unknown_priority(value: impl Into<String>) -> Self {
        ModelError::UnknownPriority {
            value: value.into(),
        }
    }

    /// Creates an unknown status error.
    pub fn unknown_status(value: impl Into<String>) -> Self {
        ModelError::UnknownStatus {
            value: value.into(),
        }
    }

    /// Creates an unknown view filter error.
    pub fn unknown_view_filter(value: impl Into<String>) -> Self {
        ModelError::UnknownViewFilter {
            value: value.into(),
        }
    }
}
