//! Heap-backed double-ended ring buffer.
//!
//! [`RingDeque<T, G>`] stores up to a fixed number of `Copy` elements in one
//! contiguous slot region and supports O(1) insertion and removal at both
//! ends. Indices wrap with a compare-and-subtract, never a modulo
//! instruction, and the capacity is arbitrary (not rounded to a power of
//! two). Every state-touching operation is bracketed by the injected
//! [`CriticalSection`] guard so a deque can be shared with an interrupt
//! handler.
//!
//! The slot region is requested once at construction, zero-initialized, and
//! released when the deque is dropped. Nothing ever resizes: a full deque
//! reports [`DequeError::Full`] until something is popped.

use crate::backing::BackingAlloc;
use crate::critical::{CriticalSection, Unguarded};
use crate::error::DequeError;
use crate::invariants::{
    debug_assert_len_bounded, debug_assert_slot_in_range, debug_assert_start_in_range,
};

use std::mem::MaybeUninit;

/// A fixed-capacity double-ended ring buffer with injectable
/// critical-section hooks.
///
/// Elements are `Copy`: removal is a bit copy, nothing is dropped, and slot
/// bytes legitimately go stale after a pop. The live elements occupy the
/// wrapped index range `[start, start + len)`; pushing at the front grows
/// the range leftward, pushing at the back grows it rightward.
///
/// # Example
///
/// ```
/// use ringdeque::RingDeque;
///
/// let mut deque: RingDeque<i32> = RingDeque::with_capacity(3);
/// deque.push_back(1).unwrap();
/// deque.push_front(0).unwrap();
/// assert_eq!(deque.pop_front(), Ok(0));
/// assert_eq!(deque.pop_back(), Ok(1));
/// assert!(deque.is_empty());
/// ```
///
/// # Guarding
///
/// The guard type `G` defaults to [`Unguarded`] (no-op hooks, single-context
/// use only). Passing real hooks via [`RingDeque::with_guard`] makes each
/// operation atomic with respect to one interrupt level; see
/// [`CriticalSection`] and [`Hooks`](crate::Hooks).
pub struct RingDeque<T, G = Unguarded> {
    /// Index of the logically first element (irrelevant while `len` is 0).
    start: usize,
    /// Count of stored elements, at most `slots.len()`.
    len: usize,
    /// Critical-section hooks bracketing every state-touching operation.
    guard: G,
    /// The backing region. `Box<[MaybeUninit<T>]>` rather than `Vec<T>`:
    /// the size is fixed for the container's life and slots outside the
    /// live range hold stale or zeroed bytes, not values.
    slots: Box<[MaybeUninit<T>]>,
}

impl<T: Copy> RingDeque<T, Unguarded> {
    /// Creates an unguarded deque holding up to `capacity` elements.
    ///
    /// Storage comes from the global allocator and starts zeroed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_guard(capacity, Unguarded)
    }
}

impl<T: Copy, G: CriticalSection> RingDeque<T, G> {
    // ---------------------------------------------------------------------
    // CONSTRUCTION
    // ---------------------------------------------------------------------

    /// Creates a deque holding up to `capacity` elements, bracketing every
    /// operation with `guard`.
    pub fn with_guard(capacity: usize, guard: G) -> Self {
        // Fixed-size buffer as a boxed slice, allocated via Vec on stable.
        // Zeroed rather than uninit: the backing region contract is a
        // calloc-style block.
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, MaybeUninit::zeroed);

        Self {
            start: 0,
            len: 0,
            guard,
            slots: buffer.into_boxed_slice(),
        }
    }

    /// Creates a deque with storage from an injected provider.
    ///
    /// Makes exactly one `alloc_zeroed` request for `capacity` slots and
    /// never calls the provider again. If the provider refuses, returns
    /// [`DequeError::AllocFailed`] and nothing is constructed.
    pub fn try_new_in<A: BackingAlloc>(
        capacity: usize,
        guard: G,
        alloc: &A,
    ) -> Result<Self, DequeError> {
        let slots = alloc
            .alloc_zeroed(capacity)
            .ok_or(DequeError::AllocFailed { slots: capacity })?;

        Ok(Self {
            start: 0,
            len: 0,
            guard,
            slots,
        })
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    // Status reads deliberately skip the critical section: a single word
    // read is treated as atomic on the supported targets. A caller that
    // needs the answer to stay true across further calls must hold the
    // guard itself (see `guard()`).

    /// Returns the fixed slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
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

    /// Returns `true` if the deque holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Borrows the injected guard, for callers that need to hold the
    /// critical section across a compound sequence of their own.
    #[inline]
    pub fn guard(&self) -> &G {
        &self.guard
    }

    // ---------------------------------------------------------------------
    // PUSH
    // ---------------------------------------------------------------------

    /// Inserts `item` before the current first element.
    ///
    /// The live range grows leftward: `start` steps back one slot, wrapping
    /// from 0 to `capacity - 1`. Fails with [`DequeError::Full`] at
    /// capacity, leaving the deque untouched.
    pub fn push_front(&mut self, item: T) -> Result<(), DequeError> {
        let capacity = self.capacity();
        self.guard.enter();

        if self.len >= capacity {
            self.guard.exit();
            return Err(DequeError::Full { capacity });
        }

        self.start = if self.start == 0 {
            capacity - 1
        } else {
            self.start - 1
        };
        self.slots[self.start] = MaybeUninit::new(item);
        self.len += 1;

        debug_assert_len_bounded!(self.len, capacity);
        debug_assert_start_in_range!(self.start, capacity);
        self.guard.exit();
        Ok(())
    }

    /// Inserts `item` after the current last element.
    ///
    /// The live range grows rightward into the slot at `start + len`,
    /// wrapped. Fails with [`DequeError::Full`] at capacity, leaving the
    /// deque untouched.
    pub fn push_back(&mut self, item: T) -> Result<(), DequeError> {
        let capacity = self.capacity();
        self.guard.enter();

        if self.len >= capacity {
            self.guard.exit();
            return Err(DequeError::Full { capacity });
        }

        let idx = self.wrap_offset(self.len);
        self.slots[idx] = MaybeUninit::new(item);
        self.len += 1;

        debug_assert_len_bounded!(self.len, capacity);
        self.guard.exit();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // POP
    // ---------------------------------------------------------------------

    /// Removes and returns the logical first element.
    ///
    /// Fails with [`DequeError::Empty`] on an empty deque, leaving state
    /// untouched. Discarding the element is just ignoring the return value.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        let capacity = self.capacity();
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        debug_assert_slot_in_range!(self.start, capacity);
        // SAFETY: len > 0, so the slot at `start` is inside the live range
        // and was written by a prior push. T: Copy, so reading the value
        // out leaves no drop obligation behind.
        let item = unsafe { self.slots[self.start].assume_init_read() };

        self.start += 1;
        if self.start >= capacity {
            self.start = 0;
        }
        self.len -= 1;

        debug_assert_start_in_range!(self.start, capacity);
        self.guard.exit();
        Ok(item)
    }

    /// Removes and returns the logical last element. `start` is unchanged.
    ///
    /// Fails with [`DequeError::Empty`] on an empty deque, leaving state
    /// untouched.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return Err(DequeError::Empty);
        }

        let idx = self.wrap_offset(self.len - 1);
        // SAFETY: len > 0, so the back-edge slot is inside the live range
        // and was written by a prior push. T: Copy.
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

        debug_assert_slot_in_range!(self.start, self.capacity());
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
    ///
    /// The reference aliases live buffer storage; the borrow must end
    /// before the next mutating call, which the borrow checker enforces.
    pub fn peek_front(&self) -> Option<&T> {
        self.guard.enter();

        if self.len == 0 {
            self.guard.exit();
            return None;
        }

        debug_assert_slot_in_range!(self.start, self.capacity());
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

    /// Resets to the empty state. Idempotent.
    ///
    /// Slot bytes are not touched or zeroed; stale contents persist until
    /// overwritten by future pushes. Backing storage is kept, so the deque
    /// is immediately reusable.
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
    /// subtract. `offset` never exceeds `len`, so the sum stays below twice
    /// the capacity and a single subtract always lands in range.
    #[inline]
    fn wrap_offset(&self, offset: usize) -> usize {
        let capacity = self.capacity();
        let mut idx = self.start + offset;
        if idx >= capacity {
            idx -= capacity;
        }
        debug_assert_slot_in_range!(idx, capacity);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let deque: RingDeque<u32> = RingDeque::with_capacity(4);
        assert!(deque.is_empty());
        assert!(!deque.is_full());
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.capacity(), 4);
    }

    #[test]
    fn push_back_pop_front_is_fifo() {
        let mut deque = RingDeque::with_capacity(8);
        for value in 1..=5 {
            deque.push_back(value).unwrap();
        }
        for expected in 1..=5 {
            assert_eq!(deque.pop_front(), Ok(expected));
        }
        assert!(deque.is_empty());
    }

    #[test]
    fn push_back_pop_back_is_lifo() {
        let mut deque = RingDeque::with_capacity(8);
        for value in 1..=5 {
            deque.push_back(value).unwrap();
        }
        for expected in (1..=5).rev() {
            assert_eq!(deque.pop_back(), Ok(expected));
        }
        assert!(deque.is_empty());
    }

    #[test]
    fn push_front_pop_front_round_trips() {
        let mut deque = RingDeque::with_capacity(4);
        deque.push_front(99).unwrap();
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.pop_front(), Ok(99));
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn push_front_drains_in_push_order_from_back() {
        let mut deque = RingDeque::with_capacity(4);
        for value in [1, 2, 3] {
            deque.push_front(value).unwrap();
        }
        // Logical order is [3, 2, 1], so the back yields push order.
        for expected in [1, 2, 3] {
            assert_eq!(deque.pop_back(), Ok(expected));
        }
    }

    #[test]
    fn push_front_wraps_start_to_last_slot() {
        let mut deque = RingDeque::with_capacity(4);
        deque.push_front(42).unwrap();
        assert_eq!(deque.start, 3);
        assert_eq!(deque.front(), Ok(42));

        // The next back slot is start + len = 4, which wraps to 0.
        deque.push_back(7).unwrap();
        assert_eq!(deque.pop_front(), Ok(42));
        assert_eq!(deque.pop_front(), Ok(7));
    }

    #[test]
    fn full_deque_rejects_both_pushes() {
        let mut deque = RingDeque::with_capacity(2);
        deque.push_back(1).unwrap();
        deque.push_back(2).unwrap();
        assert!(deque.is_full());

        assert_eq!(deque.push_back(3), Err(DequeError::Full { capacity: 2 }));
        assert_eq!(deque.push_front(3), Err(DequeError::Full { capacity: 2 }));
        assert_eq!(deque.len(), 2);
        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.pop_front(), Ok(2));
    }

    #[test]
    fn empty_deque_rejects_removal_and_reads() {
        let mut deque: RingDeque<u8> = RingDeque::with_capacity(2);
        assert_eq!(deque.pop_front(), Err(DequeError::Empty));
        assert_eq!(deque.pop_back(), Err(DequeError::Empty));
        assert_eq!(deque.front(), Err(DequeError::Empty));
        assert_eq!(deque.back(), Err(DequeError::Empty));
        assert_eq!(deque.peek_front(), None);
        assert_eq!(deque.peek_back(), None);
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn capacity_three_wraparound_walkthrough() {
        let mut deque = RingDeque::with_capacity(3);
        deque.push_back(1).unwrap();
        deque.push_back(2).unwrap();
        deque.push_back(3).unwrap();
        assert_eq!(deque.len(), 3);

        assert_eq!(deque.push_back(4), Err(DequeError::Full { capacity: 3 }));
        assert_eq!(deque.len(), 3);

        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.len(), 2);
        assert_eq!(deque.start, 1);

        // start + len = 3 wraps to slot 0.
        deque.push_back(4).unwrap();
        assert_eq!(deque.len(), 3);

        assert_eq!(deque.pop_front(), Ok(2));
        assert_eq!(deque.pop_front(), Ok(3));
        assert_eq!(deque.pop_front(), Ok(4));
        assert_eq!(deque.pop_front(), Err(DequeError::Empty));
    }

    #[test]
    fn capacity_one_cycles_both_directions() {
        let mut deque = RingDeque::with_capacity(1);
        deque.push_back(1).unwrap();
        assert_eq!(deque.pop_front(), Ok(1));
        deque.push_front(2).unwrap();
        assert_eq!(deque.pop_back(), Ok(2));
        deque.push_back(3).unwrap();
        assert_eq!(deque.push_back(4), Err(DequeError::Full { capacity: 1 }));
        assert_eq!(deque.pop_back(), Ok(3));
    }

    #[test]
    fn zero_capacity_is_both_empty_and_full() {
        let mut deque: RingDeque<u64> = RingDeque::with_capacity(0);
        assert!(deque.is_empty());
        assert!(deque.is_full());
        assert_eq!(deque.push_back(1), Err(DequeError::Full { capacity: 0 }));
        assert_eq!(deque.push_front(1), Err(DequeError::Full { capacity: 0 }));
        assert_eq!(deque.pop_front(), Err(DequeError::Empty));
        assert_eq!(deque.peek_back(), None);
    }

    #[test]
    fn front_and_back_copy_without_removing() {
        let mut deque = RingDeque::with_capacity(4);
        deque.push_back(10).unwrap();
        deque.push_back(20).unwrap();
        deque.push_back(30).unwrap();

        assert_eq!(deque.front(), Ok(10));
        assert_eq!(deque.back(), Ok(30));
        assert_eq!(deque.len(), 3);

        assert_eq!(deque.peek_front(), Some(&10));
        assert_eq!(deque.peek_back(), Some(&30));
        assert_eq!(deque.len(), 3);
    }

    #[test]
    fn peek_tracks_mutation() {
        let mut deque = RingDeque::with_capacity(4);
        deque.push_back(1).unwrap();
        assert_eq!(deque.peek_front(), Some(&1));
        deque.push_front(0).unwrap();
        assert_eq!(deque.peek_front(), Some(&0));
        deque.pop_front().unwrap();
        assert_eq!(deque.peek_front(), Some(&1));
    }

    #[test]
    fn clear_is_idempotent_and_leaves_deque_reusable() {
        let mut deque = RingDeque::with_capacity(3);
        deque.push_back(1).unwrap();
        deque.push_back(2).unwrap();
        deque.pop_front().unwrap();
        assert_eq!(deque.start, 1);

        deque.clear();
        assert_eq!((deque.start, deque.len), (0, 0));
        deque.clear();
        assert_eq!((deque.start, deque.len), (0, 0));

        deque.push_back(9).unwrap();
        assert_eq!(deque.pop_front(), Ok(9));
    }

    #[test]
    fn struct_elements_round_trip() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Point {
            x: f32,
            y: f32,
        }

        let mut deque = RingDeque::with_capacity(2);
        let a = Point { x: 1.5, y: -2.0 };
        let b = Point { x: 0.0, y: 4.25 };
        deque.push_back(a).unwrap();
        deque.push_front(b).unwrap();

        assert_eq!(deque.pop_back(), Ok(a));
        assert_eq!(deque.pop_back(), Ok(b));
    }

    #[test]
    fn long_cycling_never_loses_order() {
        // Far more traffic than capacity, so every slot wraps many times.
        let mut deque = RingDeque::with_capacity(5);
        let mut next_in = 0u32;
        let mut next_out = 0u32;

        for _ in 0..7 {
            while deque.push_back(next_in).is_ok() {
                next_in += 1;
            }
            for _ in 0..3 {
                assert_eq!(deque.pop_front(), Ok(next_out));
                next_out += 1;
            }
        }
        while let Ok(value) = deque.pop_front() {
            assert_eq!(value, next_out);
            next_out += 1;
        }
        assert_eq!(next_in, next_out);
    }

    #[test]
    fn try_new_in_uses_the_provider_once() {
        use crate::backing::Heap;
        use std::cell::Cell;

        struct CountingAlloc {
            calls: Cell<usize>,
        }

        impl BackingAlloc for CountingAlloc {
            fn alloc_zeroed<T>(&self, slots: usize) -> Option<Box<[MaybeUninit<T>]>> {
                self.calls.set(self.calls.get() + 1);
                Heap.alloc_zeroed(slots)
            }
        }

        let alloc = CountingAlloc { calls: Cell::new(0) };
        let mut deque: RingDeque<u16> = RingDeque::try_new_in(4, Unguarded, &alloc).unwrap();
        assert_eq!(alloc.calls.get(), 1);

        deque.push_back(7).unwrap();
        deque.push_front(6).unwrap();
        assert_eq!(deque.pop_back(), Ok(7));
        assert_eq!(deque.pop_back(), Ok(6));
        assert_eq!(alloc.calls.get(), 1);
    }

    #[test]
    fn try_new_in_surfaces_provider_refusal() {
        struct RefusingAlloc;

        impl BackingAlloc for RefusingAlloc {
            fn alloc_zeroed<T>(&self, _slots: usize) -> Option<Box<[MaybeUninit<T>]>> {
                None
            }
        }

        // RingDeque carries no Debug impl, so unwrap the error side only.
        let result: Result<RingDeque<u32>, _> =
            RingDeque::try_new_in(8, Unguarded, &RefusingAlloc);
        assert_eq!(result.err(), Some(DequeError::AllocFailed { slots: 8 }));
    }
}
