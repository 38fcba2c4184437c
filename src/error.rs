//! Error types for deque operations.

use thiserror::Error;

/// Outcome of a fallible deque operation.
///
/// Failed operations are no-ops: the full/empty check runs before any state
/// change, so an `Err` return leaves `start`, `len`, and the slot contents
/// exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// An insertion was attempted while the deque held `capacity` elements.
    #[error("deque is full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the deque the push was attempted on.
        capacity: usize,
    },

    /// A removal or read was attempted on an empty deque.
    #[error("deque is empty")]
    Empty,

    /// The storage provider refused the construction-time allocation request.
    #[error("backing allocation of {slots} slots failed")]
    AllocFailed {
        /// Number of element slots requested from the provider.
        slots: usize,
    },
}

impl DequeError {
    /// Returns `true` for conditions cleared by normal deque traffic
    /// (`Full` clears after a pop, `Empty` after a push).
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Full { .. } | Self::Empty)
    }

    /// Returns `true` if construction itself failed and no deque exists.
    #[inline]
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::AllocFailed { .. })
    }
}
