//! Errors
//!
//! Custom error types used throughout the `minitrees` crate.
use thiserror::Error;

/// Errors that can occur while reading samples, growing trees,
/// or querying them.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The given sample, row, or parameter violates a precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A field is compared against a threshold of another kind.
    /// First value is the column, second is the kind of the threshold,
    /// third is the kind of the field found in the row.
    #[error("Type mismatch at column {0}: expected a {1} value but found a {2} value.")]
    TypeMismatch(usize, String, String),
    /// Unable to read a sample from a file.
    #[error("Unable to read sample from a file {0}")]
    UnableToRead(String),
    /// Unable to write a tree to a file.
    #[error("Unable to write tree to file: {0}")]
    UnableToWrite(String),
}

/// Result type whose error is [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
