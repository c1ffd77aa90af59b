//! Tracing setup for the binary.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer. The filter is
//! taken from `RUST_LOG` and defaults to `warn`, which the job never reaches,
//! so a normal run prints nothing besides its completion line.

use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;
    tracing::debug!("logging initialized");
    Ok(())
}
