//! Core error types for Attempt.
//!
//! This crate contains the opaque [`Cause`] carried by a failed attempt and the
//! few errors the combinators synthesize themselves. No IO, no global state.

mod cause;
mod errors;
mod text;

pub use cause::Cause;
pub use errors::{MAX_RENDERED_VALUE, Message, NON_STRING_PAYLOAD, Panicked, PredicateRejected};
