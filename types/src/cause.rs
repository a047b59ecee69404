//! The opaque error carried by a failed attempt.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::errors::{Message, NON_STRING_PAYLOAD, Panicked};

type DynError = dyn Error + Send + Sync + 'static;

/// A shared handle to the error behind a `Failure`.
///
/// Cloning is cheap and keeps pointing at the same error. Equality is identity:
/// two causes are equal when they are clones of one captured error, regardless
/// of what the error says.
///
/// # Invariants
///
/// - Always holds an error; there is no empty cause.
/// - The wrapped error is never mutated after construction.
#[derive(Clone)]
pub struct Cause(Arc<DynError>);

impl Cause {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Cause carrying a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message::new(message))
    }

    /// Convert the payload of a caught panic.
    ///
    /// A payload that already is a `Cause` (a re-raised failure) comes back as
    /// that same cause. String payloads become [`Panicked`] with the given
    /// location; any other payload becomes a [`Panicked`] with a fixed message.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>, location: Option<String>) -> Self {
        let payload = match payload.downcast::<Cause>() {
            Ok(cause) => return *cause,
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            NON_STRING_PAYLOAD.to_string()
        };
        Self::new(Panicked::new(message, location))
    }

    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.as_error().downcast_ref::<E>()
    }

    #[must_use]
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.as_error().is::<E>()
    }

    /// True when this cause is a captured panic rather than a returned error.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.is::<Panicked>()
    }

    #[must_use]
    pub fn as_error(&self) -> &DynError {
        &*self.0
    }

    #[must_use]
    pub fn into_error(self) -> Arc<DynError> {
        self.0
    }

    /// Whether both causes share the same underlying error.
    #[must_use]
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_error(), f)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Cause> for Box<DynError> {
    fn from(cause: Cause) -> Self {
        Box::new(cause.0)
    }
}

impl AsRef<DynError> for Cause {
    fn as_ref(&self) -> &DynError {
        self.as_error()
    }
}
