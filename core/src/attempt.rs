//! The `Attempt` value type and its combinators.

use std::fmt;
use std::panic;

use attempt_types::{Cause, PredicateRejected};

use crate::capture::capture;
use crate::factory;

/// The outcome of a computation: a value, or the cause it failed with.
///
/// Every combinator consumes the attempt and returns a new one. Caller
/// functions run under a capture boundary, so a panic inside `map`,
/// `filter`, `flat_map`, `recover`, `recover_with` or `or_else` becomes a
/// `Failure` instead of unwinding through the chain. The only operation that
/// raises is [`Attempt::unwrap`].
///
/// The two variants are the whole type; matches are exhaustive:
///
/// ```compile_fail
/// use attempt_core::Attempt;
///
/// fn value(attempt: Attempt<i32>) -> i32 {
///     match attempt {
///         Attempt::Success(value) => value,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "this `Attempt` may be a `Failure`, which should be handled"]
pub enum Attempt<T> {
    Success(T),
    Failure(Cause),
}

use Attempt::{Failure, Success};

impl<T> Attempt<T> {
    /// See [`crate::run`].
    pub fn run(producer: impl FnOnce() -> T) -> Self {
        factory::run(producer)
    }

    /// See [`crate::run_fallible`].
    pub fn run_fallible<E>(producer: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<Cause>,
    {
        factory::run_fallible(producer)
    }

    pub fn success(value: T) -> Self {
        Success(value)
    }

    pub fn failure(cause: impl Into<Cause>) -> Self {
        Failure(cause.into())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Success(_) => None,
            Failure(cause) => Some(cause),
        }
    }

    /// Borrow the value. A failure shares its cause with the original.
    pub fn as_ref(&self) -> Attempt<&T> {
        match self {
            Success(value) => Success(value),
            Failure(cause) => Failure(cause.clone()),
        }
    }

    /// The held value, or `default()` for a failure.
    ///
    /// `default` runs outside any capture boundary; a panic in it propagates.
    pub fn get_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default(),
        }
    }

    /// Keep a success; replace a failure with the attempt `default` produces.
    pub fn or_else(self, default: impl FnOnce() -> Attempt<T>) -> Self {
        match self {
            Success(_) => self,
            Failure(_) => flattened(capture(default)),
        }
    }

    #[must_use]
    pub fn to_maybe(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attempt<U> {
        match self {
            Success(value) => capture(|| f(value)).into(),
            Failure(cause) => Failure(cause),
        }
    }

    /// Keep a success only if `predicate` holds for its value.
    ///
    /// A rejected value becomes a failure carrying [`PredicateRejected`],
    /// which names the value's type. A failure passes through and `predicate`
    /// is not called. Use [`Attempt::filter_debug`] to quote the value itself.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter_with(predicate, |_| PredicateRejected::of_type::<T>())
    }

    /// [`Attempt::filter`], quoting the rejected value's `Debug` form.
    pub fn filter_debug(self, predicate: impl FnOnce(&T) -> bool) -> Self
    where
        T: fmt::Debug,
    {
        self.filter_with(predicate, PredicateRejected::describing)
    }

    fn filter_with(
        self,
        predicate: impl FnOnce(&T) -> bool,
        reject: impl FnOnce(&T) -> PredicateRejected,
    ) -> Self {
        match self {
            Success(value) => match capture(|| predicate(&value)) {
                Ok(true) => Success(value),
                Ok(false) => {
                    let rejected = reject(&value);
                    tracing::trace!(subject = rejected.subject(), "Predicate rejected value");
                    Failure(Cause::new(rejected))
                }
                Err(cause) => Failure(cause),
            },
            Failure(_) => self,
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Attempt<U>) -> Attempt<U> {
        match self {
            Success(value) => flattened(capture(|| f(value))),
            Failure(cause) => Failure(cause),
        }
    }

    /// Turn a failure into a success with the value `f` derives from the cause.
    pub fn recover(self, f: impl FnOnce(Cause) -> T) -> Self {
        match self {
            Success(_) => self,
            Failure(cause) => capture(|| f(cause)).into(),
        }
    }

    /// Replace a failure with the attempt `f` derives from the cause.
    pub fn recover_with(self, f: impl FnOnce(Cause) -> Attempt<T>) -> Self {
        match self {
            Success(_) => self,
            Failure(cause) => flattened(capture(|| f(cause))),
        }
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Re-raises the cause of a failure: the panic payload is the [`Cause`]
    /// itself, and a capture boundary that catches it yields that same cause.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Success(value) => value,
            Failure(cause) => panic::panic_any(cause),
        }
    }

    /// Call exactly one of the handlers and return what it returns.
    ///
    /// Handlers run outside any capture boundary.
    pub fn switch<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Cause) -> R,
    ) -> R {
        match self {
            Success(value) => on_success(value),
            Failure(cause) => on_failure(cause),
        }
    }

    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Success(value) => Ok(value),
            Failure(cause) => Err(cause),
        }
    }
}

impl<T> Attempt<Attempt<T>> {
    /// Collapse one level of nesting.
    pub fn flatten(self) -> Attempt<T> {
        match self {
            Success(inner) => inner,
            Failure(cause) => Failure(cause),
        }
    }
}

/// A captured caller result, one level of nesting removed.
fn flattened<T>(outcome: Result<Attempt<T>, Cause>) -> Attempt<T> {
    let nested: Attempt<Attempt<T>> = outcome.into();
    nested.flatten()
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Into<Cause>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error.into()),
        }
    }
}
