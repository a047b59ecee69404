//! Capture configuration for Attempt.
//!
//! Settings live under a `[capture]` table:
//!
//! ```toml
//! [capture]
//! quiet_panics = true
//! record_location = true
//! ```
//!
//! Every field is optional. Environment variables override whatever the
//! document says, see [`CaptureConfig::with_env_overrides`].

use serde::{Deserialize, Serialize};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const QUIET_PANICS_ENV: &str = "ATTEMPT_QUIET_PANICS";
pub const RECORD_LOCATION_ENV: &str = "ATTEMPT_RECORD_LOCATION";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

/// How the capture boundary treats panics it catches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Suppress the panic hook's output for panics that end up captured as a
    /// failure. Panics outside a capture are always reported. Default: false.
    #[serde(default)]
    pub quiet_panics: bool,
    /// Attach `file:line:col` of the panic site to captured panics. Default: true.
    #[serde(default = "default_true")]
    pub record_location: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            quiet_panics: false,
            record_location: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    capture: Option<CaptureConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {source}")]
    Parse { source: toml::de::Error },
}

impl CaptureConfig {
    /// Parse a TOML document. A missing `[capture]` table yields the defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        Ok(file.capture.unwrap_or_default())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::parse(&content).inspect_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
        })
    }

    /// Apply `ATTEMPT_QUIET_PANICS` and `ATTEMPT_RECORD_LOCATION` from the
    /// process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Unrecognized values are logged and leave the field untouched.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(quiet) = flag_override(QUIET_PANICS_ENV, &lookup) {
            self.quiet_panics = quiet;
        }
        if let Some(record) = flag_override(RECORD_LOCATION_ENV, &lookup) {
            self.record_location = record;
        }
        self
    }
}

fn flag_override(name: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<bool> {
    let raw = lookup(name)?;
    let parsed = parse_flag(&raw);
    if parsed.is_none() {
        tracing::warn!(
            env_var = name,
            value = %raw,
            "Ignoring unrecognized boolean override"
        );
    }
    parsed
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
