//! CLI presentation: text and json formatters per command.

mod describe;
mod hash;

pub use describe::{format_description_json, format_description_text, NOTHING_FOUND};
pub use hash::{format_hashes_json, format_hashes_text};
