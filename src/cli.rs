//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; the route dispatches to the describe API and hash mode.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Command};
pub use presentation::{
    format_description_json, format_description_text, format_hashes_json, format_hashes_text,
    NOTHING_FOUND,
};
pub use route::RunContext;
