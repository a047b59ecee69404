//! Errors synthesized by the attempt combinators themselves.
//!
//! These are the only concrete error types the crate ever produces. Everything
//! else a `Failure` carries comes from caller code and stays opaque.

use std::any;
use std::fmt;

use thiserror::Error;

use crate::text::clip;

/// Rendered values longer than this are cut with an ellipsis.
pub const MAX_RENDERED_VALUE: usize = 200;

/// Message used when a panic payload is neither `&str` nor `String`.
pub const NON_STRING_PAYLOAD: &str = "panic payload is not a string";

/// A `filter` predicate returned `false` for a successful value.
///
/// The subject names what was rejected: the value's `Debug` form, truncated
/// to [`MAX_RENDERED_VALUE`] characters, or just its type when the value
/// cannot be rendered. Its exact text is not a stable format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("predicate does not hold for {subject}")]
pub struct PredicateRejected {
    subject: String,
}

impl PredicateRejected {
    /// Rejection naming the value itself.
    #[must_use]
    pub fn describing<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            subject: clip(&format!("{value:?}"), MAX_RENDERED_VALUE),
        }
    }

    /// Rejection naming only the value's type.
    #[must_use]
    pub fn of_type<T: ?Sized>() -> Self {
        Self {
            subject: format!("value of type {}", any::type_name::<T>()),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// A panic caught at a capture boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panicked: {message}{}", location_suffix(.location))]
pub struct Panicked {
    message: String,
    location: Option<String>,
}

#[allow(clippy::ref_option)] // thiserror hands format args the field by reference
fn location_suffix(location: &Option<String>) -> String {
    location
        .as_ref()
        .map(|at| format!(" at {at}"))
        .unwrap_or_default()
}

impl Panicked {
    #[must_use]
    pub fn new(message: impl Into<String>, location: Option<String>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `file:line:col` of the panic, when the panic hook recorded one.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// A free-form cause built from a plain message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
