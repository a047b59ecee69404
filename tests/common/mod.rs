//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivideByZero;

/// Integer division that panics on a zero divisor.
pub fn divide(dividend: i32, divisor: i32) -> i32 {
    dividend / divisor
}

pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32, DivideByZero> {
    dividend.checked_div(divisor).ok_or(DivideByZero)
}

/// Counts how often a caller function ran.
#[derive(Debug, Default)]
pub struct Calls(Cell<usize>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
