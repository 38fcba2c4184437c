//! Backing-storage provisioning for heap-backed deques.
//!
//! A deque makes exactly one request at construction time: one contiguous
//! zero-initialized block sized for `capacity` slots. It never resizes the
//! block and never calls the provider again; the block is released when the
//! deque is dropped.

use std::mem::MaybeUninit;

/// Source of zero-initialized backing storage.
///
/// Refusal is reported as `None` and surfaces from construction as
/// [`DequeError::AllocFailed`](crate::DequeError::AllocFailed) with nothing
/// built.
pub trait BackingAlloc {
    /// Hands out one zero-initialized block with room for `slots` values
    /// of `T`.
    fn alloc_zeroed<T>(&self, slots: usize) -> Option<Box<[MaybeUninit<T>]>>;
}

/// Provider backed by the global allocator.
///
/// Uses `try_reserve_exact`, so an unsatisfiable request comes back as
/// `None` instead of aborting the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heap;

impl BackingAlloc for Heap {
    fn alloc_zeroed<T>(&self, slots: usize) -> Option<Box<[MaybeUninit<T>]>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(slots).ok()?;
        buffer.resize_with(slots, MaybeUninit::zeroed);
        Some(buffer.into_boxed_slice())
    }
}
