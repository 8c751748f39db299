//! Line-oriented description file parser
//!
//! Grammar, one construct per line after trimming:
//!
//! ```text
//! // comment
//! key: value
//! key: [
//!     any line, kept verbatim after trimming
//! ]
//! ```
//!
//! Lines without a colon are ignored. Keys are trimmed and lower-cased;
//! `: value` defines the empty key. The last occurrence of a key in one
//! file wins.

use crate::description::entry::{Entry, Mapping};
use crate::diagnostics::Diagnostics;
use crate::error::ParseError;
use std::path::Path;

const COMMENT_PREFIX: &str = "//";
const BLOCK_OPEN: &str = "[";
const BLOCK_CLOSE: &str = "]";
const BOM: char = '\u{feff}';

enum State {
    Scanning,
    CollectingBlock { key: String, lines: Vec<String> },
}

/// Parse description file bytes into a mapping, discarding diagnostics.
pub fn parse(bytes: &[u8], source: &Path) -> Result<Mapping, ParseError> {
    parse_with_diagnostics(bytes, source, &mut Diagnostics::new())
}

/// Parse description file bytes into a mapping.
///
/// An unterminated block is reported into `diagnostics` and never fails the
/// parse. Only invalid UTF-8 is an error.
pub fn parse_with_diagnostics(
    bytes: &[u8],
    source: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<Mapping, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::Encoding {
        file: source.to_path_buf(),
        valid_up_to: e.valid_up_to(),
    })?;
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let text = text.replace("\r\n", "\n");

    let mut mapping = Mapping::new();
    let mut state = State::Scanning;

    for raw in text.split('\n') {
        let line = raw.trim();

        state = match state {
            State::CollectingBlock { key, mut lines } => {
                if line == BLOCK_CLOSE {
                    mapping.insert(Entry::new(key, lines.join("\n"), source));
                    State::Scanning
                } else {
                    lines.push(line.to_string());
                    State::CollectingBlock { key, lines }
                }
            }
            State::Scanning => scan_line(line, source, &mut mapping),
        };
    }

    if let State::CollectingBlock { key, .. } = state {
        diagnostics.warn(
            Some(source),
            format!("unterminated block for key '{}' was discarded", key),
        );
    }

    Ok(mapping)
}

fn scan_line(line: &str, source: &Path, mapping: &mut Mapping) -> State {
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return State::Scanning;
    }

    let Some((key, remainder)) = line.split_once(':') else {
        return State::Scanning;
    };

    let key = normalize_key(key);
    let remainder = remainder.trim();

    if remainder == BLOCK_OPEN {
        State::CollectingBlock {
            key,
            lines: Vec::new(),
        }
    } else {
        mapping.insert(Entry::new(key, remainder, source));
        State::Scanning
    }
}

/// Trim and lower-case a key.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
