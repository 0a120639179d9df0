//! Error types shared by the arena and the dynamic array.

/// Broad classification of a [`MemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The memory provider could not satisfy a request.
    AllocationFailure,
    /// The caller passed an argument outside the operation's contract.
    PreconditionViolation,
}

/// Errors returned by memory operations.
///
/// A failed operation never has an observable effect on its receiver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemError {
    /// The underlying allocator refused the request.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Size of the refused request in bytes.
        bytes: usize,
    },

    /// A size computation overflowed `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The arena does not have enough room left for the request.
    #[error("arena exhausted: requested {requested} bytes, {available} available")]
    ArenaExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still available in the arena.
        available: usize,
    },

    /// An element index was not below the live element count.
    #[error("index {index} out of bounds for count {count}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Live element count at the time of the call.
        count: usize,
    },

    /// A human-readable size string could not be parsed.
    #[error("invalid size: {0}")]
    InvalidSize(String),
}

impl MemError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } | Self::CapacityOverflow => ErrorKind::AllocationFailure,
            Self::ArenaExhausted { .. } | Self::IndexOutOfBounds { .. } | Self::InvalidSize(_) => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}
