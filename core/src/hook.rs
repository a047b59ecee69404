//! Process-wide panic hook that cooperates with the capture boundary.
//!
//! Without the hook, captured panics still become failures, but the previous
//! hook reports each one as if it were fatal and no panic site is recorded.

use std::panic::{self, PanicHookInfo};
use std::sync::OnceLock;

use attempt_config::CaptureConfig;
use thiserror::Error;

use crate::capture;

static INSTALLED: OnceLock<CaptureConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("capture panic hook is already installed")]
    AlreadyInitialized,
}

/// Install the capture-aware panic hook. Succeeds once per process.
///
/// The new hook chains to whatever hook was installed before. For panics
/// raised inside a capture it records the panic site when
/// [`CaptureConfig::record_location`] is set and stays silent when
/// [`CaptureConfig::quiet_panics`] is set. Other panics are forwarded as-is.
pub fn init(config: &CaptureConfig) -> Result<(), InitError> {
    INSTALLED
        .set(*config)
        .map_err(|_| InitError::AlreadyInitialized)?;

    let config = *config;
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        if !capture::is_capturing() {
            previous(info);
            return;
        }
        if config.record_location {
            if let Some(location) = info.location() {
                capture::record_location(location.to_string());
            }
        }
        if !config.quiet_panics {
            previous(info);
        }
    }));

    tracing::info!(
        quiet_panics = config.quiet_panics,
        record_location = config.record_location,
        "Capture panic hook installed"
    );
    Ok(())
}

#[must_use]
pub fn is_initialized() -> bool {
    INSTALLED.get().is_some()
}

/// The configuration the hook was installed with.
#[must_use]
pub fn installed_config() -> Option<CaptureConfig> {
    INSTALLED.get().copied()
}
