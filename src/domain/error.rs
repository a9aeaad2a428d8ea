//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::NodeId;

/// Errors raised by node and arena operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("stale node handle: {0}")]
    StaleNode(NodeId),

    #[error("occurrence count underflow")]
    CountUnderflow,

    #[error("occurrence count overflow")]
    CountOverflow,

    #[error("unknown count policy: {0}")]
    UnknownCountPolicy(String),
}

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
