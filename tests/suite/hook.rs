//! Panic hook installation.
//!
//! The hook is process-wide, so everything that installs it lives in one test.

use std::cell::Cell;
use std::panic;

use attempt_core::{
    Attempt, CaptureConfig, InitError, Panicked, init, installed_config, is_initialized, run,
};

use crate::common::init_tracing;

thread_local! {
    /// Panics that reached the hook installed before `init` on this thread.
    static FORWARDED: Cell<usize> = const { Cell::new(0) };
}

fn forwarded() -> usize {
    FORWARDED.with(Cell::get)
}

/// Put a counting hook in front of the default one, to be chained by `init`.
fn install_counting_hook() {
    let default = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        FORWARDED.with(|count| count.set(count.get() + 1));
        default(info);
    }));
}

fn panicked<T>(attempt: &Attempt<T>) -> &Panicked {
    attempt
        .cause()
        .and_then(|cause| cause.downcast_ref::<Panicked>())
        .unwrap()
}

#[test]
fn hook_installs_once_and_records_panic_sites() {
    init_tracing();
    install_counting_hook();
    let config = CaptureConfig {
        quiet_panics: true,
        record_location: true,
    };

    init(&config).unwrap();
    assert!(is_initialized());
    assert_eq!(installed_config(), Some(config));
    assert_eq!(
        init(&CaptureConfig::default()),
        Err(InitError::AlreadyInitialized)
    );
    assert_eq!(installed_config(), Some(config));

    // ------------------------------------------------------------------------
    // Captured panics record their site and stay quiet
    // ------------------------------------------------------------------------
    let before = forwarded();
    let attempt = run(|| -> i32 { panic!("located") });
    let located = panicked(&attempt);
    assert_eq!(located.message(), "located");
    assert!(
        located.location().is_some_and(|at| at.contains("hook.rs")),
        "{located}"
    );
    assert_eq!(forwarded(), before);

    // ------------------------------------------------------------------------
    // Panics outside any capture reach the previous hook
    // ------------------------------------------------------------------------
    let before = forwarded();
    let outside = panic::catch_unwind(|| -> i32 { panic!("uncaptured") });
    assert!(outside.is_err());
    assert_eq!(forwarded(), before + 1);

    // ------------------------------------------------------------------------
    // A site recorded for a panic the caller caught does not leak forward
    // ------------------------------------------------------------------------
    let inner = run(|| panic::catch_unwind(|| -> i32 { panic!("inner") }).is_err());
    assert_eq!(inner, Attempt::Success(true));

    let resumed = run(|| -> i32 { panic::resume_unwind(Box::new("later")) });
    let resumed = panicked(&resumed);
    assert_eq!(resumed.message(), "later");
    assert_eq!(resumed.location(), None);
}
