//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Day index {index} out of range (agenda has {len} days)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Day export requires a multi-day agenda")]
    NotMultiDay,
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
