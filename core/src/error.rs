//! Error types for option parsing and table loading.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors returned by [`Parser`](crate::Parser).
///
/// All variants except [`MissingValue`](ParseError::MissingValue) are
/// precondition violations detected before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The argument vector is empty.
    #[error("argument vector is empty")]
    EmptyArguments,

    /// The descriptor slice is empty.
    #[error("no option descriptors supplied")]
    NoOptions,

    /// The value buffer is not aligned with the descriptor slice.
    #[error("value buffer holds {actual} slot(s), expected {expected}")]
    ValueBufferSize { expected: usize, actual: usize },

    /// The free-argument buffer cannot hold every index plus the sentinel.
    #[error("free-argument buffer holds {actual} slot(s), at least {required} required")]
    FreeArgBufferSize { required: usize, actual: usize },

    /// An option requiring a value was the last argument.
    #[error("option '{option}' at argument {index} requires a value")]
    MissingValue { option: String, index: usize },
}

impl ParseError {
    /// Returns the nonzero status code for this error. Success is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::ParseError;
    ///
    /// assert_eq!(ParseError::EmptyArguments.status(), 1);
    /// assert_ne!(ParseError::NoOptions.status(), 0);
    /// ```
    pub fn status(&self) -> i32 {
        match self {
            ParseError::EmptyArguments
            | ParseError::NoOptions
            | ParseError::ValueBufferSize { .. }
            | ParseError::FreeArgBufferSize { .. } => 1,
            ParseError::MissingValue { .. } => 2,
        }
    }
}

/// Errors that can occur while loading an [`OptionTable`](crate::OptionTable).
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The table parsed but its descriptors are inconsistent.
    #[error("invalid option table: {0}")]
    Invalid(#[from] ValidationError),
}

/// Convenience alias for parse results.
pub type Result<T> = std::result::Result<T, ParseError>;
