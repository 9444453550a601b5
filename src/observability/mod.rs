//! Logging setup.
//!
//! Everything goes to stderr so stdout carries only the sequence. `RUST_LOG`,
//! when set, takes precedence over the level chosen on the command line.

use crate::errors::{Error, Result};
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter, preferring `RUST_LOG` over `default_level`.
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Install the global stderr subscriber.
pub fn init_logging(default_level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init_logging(LevelFilter::WARN);
        let second = init_logging(LevelFilter::DEBUG);
        assert!(matches!(second, Err(Error::Logging(_))));
    }
}
