//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::NodeError;

/// Errors surfaced by the crate's public entry points.
#[derive(Error, Debug)]
pub enum BstError {
    #[error("{0}")]
    Node(#[from] NodeError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for crate-level operations.
pub type BstResult<T> = Result<T, BstError>;
