//! Entry points that build an [`Attempt`].

use attempt_types::Cause;

use crate::attempt::Attempt;
use crate::capture::capture;

/// Invoke `producer` once and capture a panic as a failure.
///
/// Never re-raises: a normal return is a `Success`, a panic is a `Failure`
/// carrying the panic (or, for a re-raised failure, its original cause).
///
/// ```
/// use attempt_core::{Attempt, run};
///
/// let parsed = run(|| "42".parse::<i32>().unwrap());
/// assert_eq!(parsed, Attempt::Success(42));
///
/// let broken = run(|| "forty-two".parse::<i32>().unwrap());
/// assert!(broken.is_failure());
/// ```
pub fn run<T>(producer: impl FnOnce() -> T) -> Attempt<T> {
    capture(producer).into()
}

/// Like [`run`], for producers that report errors through `Result`.
///
/// `Err(e)` becomes a failure carrying `e`; a panic is captured as with `run`.
pub fn run_fallible<T, E>(producer: impl FnOnce() -> Result<T, E>) -> Attempt<T>
where
    E: Into<Cause>,
{
    match capture(producer) {
        Ok(result) => result.into(),
        Err(cause) => Attempt::Failure(cause),
    }
}

pub fn success<T>(value: T) -> Attempt<T> {
    Attempt::Success(value)
}

pub fn failure<T>(cause: impl Into<Cause>) -> Attempt<T> {
    Attempt::Failure(cause.into())
}
