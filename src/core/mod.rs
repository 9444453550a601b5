pub mod sequence;

pub use sequence::{generate, Sequence};
