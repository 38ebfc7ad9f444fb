//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent misuse of the node contract.
/// These are independent of filesystem and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("unsupported operation on leaf node: {name}")]
    UnsupportedOperation { name: String },

    #[error("child index {index} out of range (child count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
