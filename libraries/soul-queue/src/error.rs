//! Error types for queue management

use thiserror::Error;

/// Queue errors
///
/// Every variant except `InvariantViolation` and `Config` is a rejected
/// precondition: the call was a no-op and the queue is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Nothing was supplied to add
    #[error("No entries to add")]
    NoEntries,

    /// Nothing was selected for removal
    #[error("No entries selected for removal")]
    NothingToRemove,

    /// Library position does not exist
    #[error("Library position out of bounds: {position} (library size {len})")]
    PositionOutOfBounds { position: usize, len: usize },

    /// Move range or destination outside the library
    #[error("Move out of bounds: {start}..{end} -> {to} (library size {len})")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        to: usize,
        len: usize,
    },

    /// Internal bookkeeping is inconsistent
    #[error("Queue invariant violated: {0}")]
    InvariantViolation(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
