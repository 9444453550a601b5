//! Runtime configuration.
//!
//! The upper index is fixed at compile time; only log verbosity varies
//! between runs.

use tracing::level_filters::LevelFilter;

/// Highest Fibonacci index printed by the binary.
pub const DEFAULT_UPPER_INDEX: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub upper_index: usize,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            upper_index: DEFAULT_UPPER_INDEX,
            log_level: LevelFilter::WARN,
        }
    }
}

impl RunConfig {
    pub fn with_log_level(log_level: LevelFilter) -> Self {
        Self {
            log_level,
            ..Self::default()
        }
    }
}

/// Map `-q` / repeated `-v` flags to a level filter.
pub fn level_from_flags(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
