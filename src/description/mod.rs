//! Description files
//!
//! A description file is a sidecar text file of `key: value` lines (plus
//! bracketed multi-line blocks) that attaches metadata to a file or to a
//! whole directory subtree.

pub mod entry;
pub mod parser;

pub use entry::{Entry, Mapping};
pub use parser::{parse, parse_with_diagnostics};
