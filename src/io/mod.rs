pub mod output;

pub use output::{print_sequence, render, PlainWriter};
