//! Error types for fancy-writer.
//!
//! Uses thiserror for derive macros. Missing placeholder arguments are not an
//! error: interpolation substitutes an empty string for them.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for writer operations.
#[derive(Error, Debug)]
pub enum WriterError {
    /// The invoked name matched no built-in, caller-context operation, or template.
    #[error("unresolved operation '{name}'")]
    UnresolvedOperation {
        /// The name that could not be resolved.
        name: String,
    },

    /// A built-in or template was invoked with arguments it cannot use.
    #[error("invalid argument for '{operation}': {message}")]
    InvalidArgument { operation: String, message: String },

    /// The output sink rejected a write.
    #[error("failed to write to sink: {0}")]
    Sink(#[from] io::Error),

    /// A caller-context operation reported a failure.
    #[error("caller operation '{operation}' failed: {message}")]
    Caller { operation: String, message: String },

    /// A program file could not be read or parsed.
    #[error("{0}")]
    Program(String),
}

impl WriterError {
    /// Shorthand for [`WriterError::InvalidArgument`].
    pub fn invalid_argument(operation: &str, message: impl Into<String>) -> Self {
        WriterError::InvalidArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// Returns the CLI exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WriterError::UnresolvedOperation { .. } => exit_codes::UNRESOLVED_OPERATION,
            WriterError::InvalidArgument { .. } => exit_codes::USER_ERROR,
            WriterError::Sink(_) => exit_codes::IO_FAILURE,
            WriterError::Caller { .. } => exit_codes::USER_ERROR,
            WriterError::Program(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for writer operations.
pub type Result<T> = std::result::Result<T, WriterError>;
