//! Configuration sources beyond the built-in defaults.

pub mod environment;
pub mod global_file;
