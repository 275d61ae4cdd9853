//! Detection error types

use thiserror::Error;

/// Errors that can occur during relationship detection
///
/// Missing members, foreign families and disconnected graphs are not errors;
/// they yield the "unknown" label.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DetectionError {
    /// A required identifier was empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Store error while loading the family
    #[error("Store error: {0}")]
    Store(String),
}
