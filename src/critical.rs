//! Critical-section capability injected into a deque at construction.
//!
//! Every deque operation that touches `start`, `len`, or slot contents
//! brackets that work between [`CriticalSection::enter`] and
//! [`CriticalSection::exit`]. The hooks are expected to make the bracketed
//! region atomic with respect to at most one interrupt level or one other
//! execution context, typically by masking and restoring interrupts.
//!
//! Implementations provided here:
//! - [`Unguarded`]: no-op hooks for single-context use (the default).
//! - [`Hooks`]: adapts a pair of closures, for platforms where masking is
//!   two plain function calls.
//! - [`Global`] (feature `critical-section`): acquires the platform-global
//!   section of the `critical-section` crate.
//!
//! The deque guarantees the calls stay strictly paired and never nested for
//! one container: `enter`, the bracketed work, then exactly one `exit`,
//! including on the full/empty error paths.

/// Mutual-exclusion hooks bracketing every state-touching deque operation.
pub trait CriticalSection {
    /// Called immediately before the deque reads or writes shared state.
    fn enter(&self);

    /// Called immediately after, exactly once per `enter`.
    fn exit(&self);
}

/// Forward through references so one guard instance can serve several
/// containers.
impl<G: CriticalSection + ?Sized> CriticalSection for &G {
    #[inline]
    fn enter(&self) {
        (**self).enter();
    }

    #[inline]
    fn exit(&self) {
        (**self).exit();
    }
}

/// No-op hooks for single-context use.
///
/// With `Unguarded` nothing is masked and the container is only safe for
/// single-threaded, non-reentrant use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unguarded;

impl CriticalSection for Unguarded {
    #[inline]
    fn enter(&self) {}

    #[inline]
    fn exit(&self) {}
}

/// Hooks backed by a pair of closures.
///
/// # Example
///
/// ```
/// use ringdeque::{Hooks, RingDeque};
///
/// // Stands in for platform mask/restore calls.
/// let guard = Hooks::new(|| {}, || {});
/// let mut deque: RingDeque<u32, _> = RingDeque::with_guard(8, guard);
/// deque.push_back(1).unwrap();
/// ```
pub struct Hooks<E, X> {
    enter: E,
    exit: X,
}

impl<E: Fn(), X: Fn()> Hooks<E, X> {
    /// Wraps `enter` and `exit` closures as a critical-section capability.
    pub const fn new(enter: E, exit: X) -> Self {
        Self { enter, exit }
    }
}

impl<E: Fn(), X: Fn()> CriticalSection for Hooks<E, X> {
    #[inline]
    fn enter(&self) {
        (self.enter)();
    }

    #[inline]
    fn exit(&self) {
        (self.exit)();
    }
}

/// Hooks backed by the `critical-section` crate's global section.
///
/// `enter` acquires the platform implementation and parks the restore token;
/// `exit` releases with that token. The deque's strict pairing keeps the
/// acquire/release bracket well formed; nested brackets from several
/// containers are fine because each operation completes before another
/// begins in the same context.
#[cfg(feature = "critical-section")]
#[derive(Debug, Default)]
pub struct Global {
    saved: core::cell::Cell<Option<critical_section::RestoreState>>,
}

#[cfg(feature = "critical-section")]
impl Global {
    /// Creates a guard with no section held.
    pub const fn new() -> Self {
        Self {
            saved: core::cell::Cell::new(None),
        }
    }
}

#[cfg(feature = "critical-section")]
impl CriticalSection for Global {
    #[inline]
    fn enter(&self) {
        // SAFETY: the deque calls enter/exit strictly paired and never
        // nested for one container, so every acquire is released exactly
        // once with its own token, in reverse acquisition order.
        let restore = unsafe { critical_section::acquire() };
        let prev = self.saved.replace(Some(restore));
        debug_assert!(prev.is_none(), "critical section entered twice");
    }

    #[inline]
    fn exit(&self) {
        if let Some(restore) = self.saved.take() {
            // SAFETY: `restore` came from the matching acquire in `enter`.
            unsafe { critical_section::release(restore) };
        }
    }
}
