//! ringdeque - Fixed-Capacity Double-Ended Ring Buffer
//!
//! A deque over one contiguous slot region: O(1) insertion and removal at
//! both ends, wraparound by compare-and-subtract (capacity is arbitrary, not
//! rounded to a power of two), and an injectable critical-section guard
//! bracketing every state-touching operation so a deque can be shared with
//! an interrupt handler.
//!
//! # Key Features
//!
//! - Push, pop, copy-out and borrow at both ends, all O(1) and non-blocking
//! - Critical-section hooks as a capability: no-op ([`Unguarded`]), closure
//!   pair ([`Hooks`]), or the `critical-section` crate (feature
//!   `critical-section`)
//! - [`RingDeque`] with owned heap storage and an injectable provider;
//!   [`StackDeque`] with inline storage for targets without an allocator
//! - Failures are no-ops: `Full` and `Empty` never disturb stored elements
//!
//! # Example
//!
//! ```
//! use ringdeque::{DequeError, RingDeque};
//!
//! let mut deque: RingDeque<i32> = RingDeque::with_capacity(3);
//! deque.push_back(1).unwrap();
//! deque.push_back(2).unwrap();
//! deque.push_back(3).unwrap();
//! assert_eq!(deque.push_back(4), Err(DequeError::Full { capacity: 3 }));
//!
//! assert_eq!(deque.pop_front(), Ok(1));
//! deque.push_back(4).unwrap(); // wraps into the freed slot
//!
//! assert_eq!(deque.pop_front(), Ok(2));
//! assert_eq!(deque.pop_front(), Ok(3));
//! assert_eq!(deque.pop_front(), Ok(4));
//! assert_eq!(deque.pop_front(), Err(DequeError::Empty));
//! ```

mod backing;
mod critical;
mod deque;
mod error;
mod invariants;
mod stack_deque;

pub use backing::{BackingAlloc, Heap};
#[cfg(feature = "critical-section")]
pub use critical::Global;
pub use critical::{CriticalSection, Hooks, Unguarded};
pub use deque::RingDeque;
pub use error::DequeError;
pub use stack_deque::StackDeque;
