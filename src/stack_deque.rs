//! Inline-storage deque with compile-time capacity.
//!
//! [`StackDeque<T, N, G>`] embeds its `N` slots directly in the struct, so
//! no allocator is involved at any point. Construction is a `const fn`,
//! which lets a deque live in a `static` (behind whatever cell the platform
//! uses for interrupt-shared state) on targets without a heap. Semantics
//! are identical to [`RingDeque`](crate::RingDeque): same wrap arithmetic,
//! same guard discipline, same error contract.
//!
//! # Sizing
//!
//! The whole value lives wherever you put it. `StackDeque<u64, 256>` is
//! about 2 KiB; keep large capacities off the stack or use
//! [`RingDeque`](crate::RingDeque).

use crate::critical::{CriticalSection, Unguarded};
use crate::error::DequeError;
use crate::invariants::{
    debug_assert_len_bounded, debug_assert_slot_in_range, debug_assert_start_in_range,
};

use std::mem::MaybeUninit;

/// A fixed-capacity double-ended ring buffer with inline storage.
///
/// Element and guard contracts match [`RingDeque`](crate::RingDeque);
/// capacity is the const parameter `N` and may be any value, including
/// values that are not powers of two.
///
/// # Example
///
/// ```
/// use ringdeque::StackDeque;
///
/// let mut deque: StackDeque<u16, 3> = StackDeque::new();
/// deque.push_back(1).unwrap();
/// deque.push_back(2).unwrap();
/// assert_eq!(deque.pop_front(), Ok(1));
/// ```
pub struct StackDeque<T, const N: usize, G = Unguarded> {
    /// Index of the logically first element (irrelevant while `len` is 0).
    start: usize,
    /// Count of stored elements, at most `N`.
    len: usize,
    /// Critical-section hooks bracketing every state-touching operation.
    guard: G,
    /// Inline slot storage, zeroed at construction.
    slots: [MaybeUninit<T>; N],
}

impl<T: Copy, const N: usize> StackDeque<T, N, Unguarded> {
    /// Creates an unguarded deque. Usable in `const` contexts.
    pub const fn new() -> Self {
        Self::with_guard(Unguarded)
    }
}

impl<T: Copy, const N: usize> Default for StackDeque<T, N, Unguarded> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize, G: CriticalSection> StackDeque<T, N, G> {
    // ---------------------------------------------------------------------
    // CONSTRUCTION
    // ---------------------------------------------------------------------

    /// Creates a deque bracketing every operation with `guard`.
    pub const fn with_guard(guard: G) -> Self {
        Self {
            start: 0,
            len: 0,
            guard,
            // SAFETY: an array of MaybeUninit needs no initialization, and
            // zeroed backing matches the allocator-backed variant's
            // starting state.
            slots: unsafe { MaybeUninit::zeroed().assume_init() },
        }
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    // Same unguarded single-word reads as RingDeque; hold the guard
    // yourself if the answer must stay true across further calls.

    /// Returns the fixed slot count `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque holds `N` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Borrows the injected guard.
    #[inline]
    pub fn guard(&self) -> &G {
        &self.guard
    }

    // ---------------------------------------------------------------------
    // PUSH
    // ---------------------------------------------------------------------

    /// Inserts `item` before the current first element.
    pub fn push_front(&mut self, item: T) -> Result<(), DequeError> {
        self.guard.enter();

        if self.len >= N {
            self.guard.exit();
            return Err(DequeError::Full { capacity: N });
        }

        self.start = if self.start == 0 { N - 1 } else { self.start - 1 };
        self.slots[self.start] = MaybeUninit::new(item);
        self.len += 1;

        debug_assert_len_bounded!(self.len, N);
        debug_assert_start_in_range!(self.start, N);
        self.guard.exit();
        Ok(())
    }

    /// Inserts `item` after the current last element.
    pub fn push_back(&mut self, item: T) -> Result<(), DequeError> {
        self.guard.enter();

        if self.len >= N {
            self.guard.exit();
            return Err(DequeError::Full { capacity: N });
        }

        let idx = self.wrap_offset(self.len);
        self.slots[idx] = MaybeUninit::new(item);
        self.len += 1;

        debug_assert_len_bounded!(self.len, N);
        self.guard.exit();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // POP
    // ---------------------------------------------------------------------

    /// Removes and returns the logical first element.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        debug_assert_slot_in_range!(self.start, N);
        // SAFETY: len > 0, so the slot at `start` is inside the live range
        // and was written by a prior push. T: Copy.
        let item = unsafe { self.slots[self.start].assume_init_read() };

        self.start += 1;
        if self.start >= N {
            self.start = 0;
        }
        self.len -= 1;

        debug_assert_start_in_range!(self.start, N);
        self.guard.exit();
        Ok(item)
    }

    /// Removes and returns the logical last element. `start` is unchanged.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        let idx = self.wrap_offset(self.len - 1);
        // SAFETY: len > 0, so the back-edge slot is live. T: Copy.
        let item = unsafe { self.slots[idx].assume_init_read() };
        self.len -= 1;

        self.guard.exit();
        Ok(item)
    }

    // ---------------------------------------------------------------------
    // READ
    // ---------------------------------------------------------------------

    /// Copies out the logical first element without removing it.
    pub fn front(&self) -> Result<T, DequeError> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        debug_assert_slot_in_range!(self.start, N);
        // SAFETY: non-empty, so the slot at `start` is live.
        let item = unsafe { self.slots[self.start].assume_init_read() };

        self.guard.exit();
        Ok(item)
    }

    /// Copies out the logical last element without removing it.
    pub fn back(&self) -> Result<T, DequeError> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        let idx = self.wrap_offset(self.len - 1);
        // SAFETY: non-empty, so the back-edge slot is live.
        let item = unsafe { self.slots[idx].assume_init_read() };

        self.guard.exit();
        Ok(item)
    }

    /// Borrows the logical first element, or `None` when empty.
    pub fn peek_front(&self) -> Option<&T> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return None;
        }

        debug_assert_slot_in_range!(self.start, N);
        // SAFETY: non-empty, so the slot at `start` is live.
        let item = unsafe { self.slots[self.start].assume_init_ref() };

        self.guard.exit();
        Some(item)
    }

    /// Borrows the logical last element, or `None` when empty.
    pub fn peek_back(&self) -> Option<&T> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return None;
        }

        let idx = self.wrap_offset(self.len - 1);
        // SAFETY: non-empty, so the back-edge slot is live.
        let item = unsafe { self.slots[idx].assume_init_ref() };

        self.guard.exit();
        Some(item)
    }

    // ---------------------------------------------------------------------
    // CLEAR
    // ---------------------------------------------------------------------

    /// Resets to the empty state without touching slot bytes. Idempotent.
    pub fn clear(&mut self) {
        self.guard.enter();
        self.start = 0;
        self.len = 0;
        self.guard.exit();
    }

    // ---------------------------------------------------------------------
    // INDEX ARITHMETIC
    // ---------------------------------------------------------------------

    /// Wraps `start + offset` into the slot range with one conditional
    /// subtract, same as the heap variant.
    #[inline]
    fn wrap_offset(&self, offset: usize) -> usize {
        let mut idx = self.start + offset;
        if idx >= N {
            idx -= N;
        }
        debug_assert_slot_in_range!(idx, N);
        idx
    }
}
