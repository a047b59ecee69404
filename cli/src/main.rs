//! Attempt demo - binary entry point.
//!
//! ```text
//! attempt-demo [DIVIDEND] [DIVISOR] [THRESHOLD]
//! ```
//!
//! Parses the arguments, divides, filters the quotient against the threshold
//! and prints what each stage of the chain produced. Defaults are `10 0 10`,
//! which exercises the captured divide-by-zero path.
//!
//! Configuration is read from the TOML file named by `ATTEMPT_CONFIG` when set,
//! then overridden by `ATTEMPT_QUIET_PANICS` and `ATTEMPT_RECORD_LOCATION`.
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use std::{env, io};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use attempt_core::{Attempt, CaptureConfig, run_fallible};

const CONFIG_ENV: &str = "ATTEMPT_CONFIG";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config() -> Result<CaptureConfig> {
    let config = match env::var_os(CONFIG_ENV) {
        Some(path) => CaptureConfig::load(&path)
            .with_context(|| format!("failed to load config named by {CONFIG_ENV}"))?,
        None => CaptureConfig::default(),
    };
    Ok(config.with_env_overrides())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Inputs {
    dividend: String,
    divisor: String,
    threshold: String,
}

impl Inputs {
    fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let mut next = |default: &str| args.next().unwrap_or_else(|| default.to_string());
        Self {
            dividend: next("10"),
            divisor: next("0"),
            threshold: next("10"),
        }
    }
}

fn parse(raw: &str) -> Attempt<i32> {
    run_fallible(|| raw.trim().parse::<i32>())
}

fn quotient(inputs: &Inputs) -> Attempt<i32> {
    parse(&inputs.dividend)
        .flat_map(|dividend| parse(&inputs.divisor).map(|divisor| dividend / divisor))
}

fn above_threshold(quotient: Attempt<i32>, threshold: &str) -> Attempt<i32> {
    let threshold = parse(threshold).get_or_else(|| 0);
    quotient.filter_debug(|value| *value > threshold)
}

/// Zero for a captured panic, -1 for any other failure.
fn recovered(quotient: Attempt<i32>) -> Attempt<i32> {
    quotient.recover(|cause| if cause.is_panic() { 0 } else { -1 })
}

fn describe(attempt: Attempt<i32>) -> String {
    attempt.switch(
        |value| format!("success: {value}"),
        |cause| format!("failure: {cause}"),
    )
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    tracing::info!(
        quiet_panics = config.quiet_panics,
        record_location = config.record_location,
        "Capture configuration loaded"
    );
    attempt_core::init(&config).context("failed to install capture panic hook")?;

    let inputs = Inputs::from_args(env::args().skip(1));
    let quotient = quotient(&inputs);

    println!(
        "{} / {}            -> {}",
        inputs.dividend,
        inputs.divisor,
        describe(quotient.clone())
    );
    println!(
        "get_or_else(-1)    -> {}",
        quotient.clone().get_or_else(|| -1)
    );
    println!(
        "filter(> {})       -> {}",
        inputs.threshold,
        describe(above_threshold(quotient.clone(), &inputs.threshold))
    );
    println!("recover            -> {}", describe(recovered(quotient.clone())));
    println!("to_maybe           -> {:?}", quotient.to_maybe());

    Ok(())
}
