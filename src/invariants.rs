//! Debug assertion macros for deque structural invariants.
//!
//! Only active in debug builds (`debug_assert!`), so there is zero overhead
//! in release builds. Used by both `RingDeque<T, G>` and `StackDeque<T, N, G>`.

/// Assert that the element count does not exceed capacity.
///
/// Holds after every operation: `0 <= len <= capacity`.
macro_rules! debug_assert_len_bounded {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len <= $capacity,
            "len {} exceeds capacity {}",
            $len,
            $capacity
        )
    };
}

/// Assert that `start` names a real slot.
///
/// Holds after every operation on a non-degenerate deque: `start < capacity`.
/// A zero-capacity deque keeps `start == 0` and never indexes.
macro_rules! debug_assert_start_in_range {
    ($start:expr, $capacity:expr) => {
        debug_assert!(
            $capacity == 0 || $start < $capacity,
            "start {} out of range for capacity {}",
            $start,
            $capacity
        )
    };
}

/// Assert that a slot index about to be dereferenced names a real slot.
///
/// Every access index is either `start` itself or `start + offset` wrapped
/// by a single subtract. Under the `start` and `len` invariants one subtract
/// always lands below capacity, so an index at or past capacity means the
/// bookkeeping was corrupted before the access.
macro_rules! debug_assert_slot_in_range {
    ($idx:expr, $capacity:expr) => {
        debug_assert!(
            $idx < $capacity,
            "slot index {} out of range for capacity {}",
            $idx,
            $capacity
        )
    };
}

pub(crate) use debug_assert_len_bounded;
pub(crate) use debug_assert_slot_in_range;
pub(crate) use debug_assert_start_in_range;

#[cfg(test)]
mod tests {
    #[test]
    fn assertions_accept_boundary_states() {
        debug_assert_len_bounded!(0, 0);
        debug_assert_len_bounded!(4, 4);
        debug_assert_start_in_range!(0, 0);
        debug_assert_start_in_range!(3, 4);
        debug_assert_slot_in_range!(0, 1);
        debug_assert_slot_in_range!(3, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds capacity")]
    fn len_bounded_fires_on_excess_len() {
        debug_assert_len_bounded!(5, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "start 4 out of range")]
    fn start_in_range_fires_on_out_of_range_start() {
        debug_assert_start_in_range!(4, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "slot index 4 out of range")]
    fn slot_in_range_fires_on_out_of_range_index() {
        // An index equal to capacity is what a missed wraparound subtract
        // would produce.
        debug_assert_slot_in_range!(4, 4);
    }
}
