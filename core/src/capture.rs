//! The capture boundary: run caller code and turn a panic into a [`Cause`].

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use attempt_types::Cause;

thread_local! {
    /// Number of captures currently running on this thread.
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    /// Panic site recorded by the hook for the capture that is unwinding.
    static LAST_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

struct DepthGuard;

impl DepthGuard {
    fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

pub(crate) fn is_capturing() -> bool {
    DEPTH.with(|depth| depth.get() > 0)
}

pub(crate) fn record_location(location: String) {
    LAST_LOCATION.with(|slot| *slot.borrow_mut() = Some(location));
}

fn take_location() -> Option<String> {
    LAST_LOCATION.with(|slot| slot.borrow_mut().take())
}

/// Invoke `f` once. A panic out of `f` comes back as `Err(cause)`.
///
/// State `f` captured is never read again after it unwinds; only the cause
/// leaves this function.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> Result<R, Cause> {
    // A site left by a panic caught inside an earlier capture must not be
    // attributed to this one, which may unwind without passing the hook.
    take_location();
    let outcome = {
        let _guard = DepthGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };

    outcome.map_err(|payload| {
        let cause = Cause::from_panic(payload, take_location());
        tracing::debug!(cause = %cause, panic = cause.is_panic(), "Captured failure");
        cause
    })
}
