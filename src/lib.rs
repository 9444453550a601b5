// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::config::{RunConfig, DEFAULT_UPPER_INDEX};
pub use crate::core::{generate, Sequence};
pub use crate::errors::{Error, Result};
pub use crate::io::{print_sequence, render, PlainWriter};
