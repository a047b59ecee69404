//! Attempt: a value that is either a computed result or the cause of its failure.
//!
//! # Architecture
//!
//! ```text
//! run / run_fallible / success / failure
//!            |
//!            v
//!      Attempt<T> --map/filter/flat_map/recover/or_else--> Attempt<U>
//!            |
//!            v
//!   get_or_else | switch | to_maybe | into_result | unwrap (re-raises)
//! ```
//!
//! Caller functions handed to a combinator run inside a capture boundary: a
//! panic becomes a `Failure` carrying a [`Cause`]. Installing the panic hook
//! with [`init`] is optional; it records panic sites and can silence the
//! default hook for panics that end up captured.
//!
//! ```
//! use attempt_core::{PredicateRejected, run, success};
//!
//! fn divide(a: i32, b: i32) -> i32 {
//!     a / b
//! }
//!
//! let quotient = run(|| divide(10, 0));
//! assert!(quotient.cause().is_some_and(|cause| cause.is_panic()));
//! assert_eq!(quotient.get_or_else(|| -1), -1);
//!
//! let rejected = success(4).filter(|x| *x > 10).switch(
//!     |_| false,
//!     |cause| cause.is::<PredicateRejected>(),
//! );
//! assert!(rejected);
//! ```

mod attempt;
mod capture;
mod factory;
mod hook;

pub use attempt::Attempt;
pub use factory::{failure, run, run_fallible, success};
pub use hook::{InitError, init, installed_config, is_initialized};

pub use attempt_config::CaptureConfig;
pub use attempt_types::{Cause, Message, Panicked, PredicateRejected};
