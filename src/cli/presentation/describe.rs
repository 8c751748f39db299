//! Description presentation: sorted keys with provenance.

use crate::api::Description;
use crate::description::Entry;
use crate::error::ApiError;
use owo_colors::OwoColorize;
use serde_json::json;
use std::collections::BTreeMap;

pub const NOTHING_FOUND: &str = "could not find any description files";

const INDENT: &str = "    ";

/// Render entries in key order; every entry is followed by the file it came from.
///
/// ```text
/// notes: [
///     first line
///     second line
/// ]
///     // "/music/tago.tago"
/// ```
pub fn format_description_text(description: &Description, color: bool) -> String {
    if !description.found_any() {
        return NOTHING_FOUND.to_string();
    }

    description
        .mapping
        .sorted()
        .into_iter()
        .map(|entry| format_entry(entry, color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_entry(entry: &Entry, color: bool) -> String {
    let key = if color {
        entry.key().bold().to_string()
    } else {
        entry.key().to_string()
    };

    let mut out = if entry.is_multiline() {
        let mut block = format!("{}: [\n", key);
        for line in entry.value().split('\n') {
            block.push_str(INDENT);
            block.push_str(line);
            block.push('\n');
        }
        block.push(']');
        block
    } else {
        format!("{}: {}", key, entry.value())
    };

    let provenance = format!("{}// \"{}\"", INDENT, entry.source().display());
    out.push('\n');
    if color {
        out.push_str(&provenance.dimmed().to_string());
    } else {
        out.push_str(&provenance);
    }
    out
}

pub fn format_description_json(description: &Description) -> Result<String, ApiError> {
    let entries: BTreeMap<&str, serde_json::Value> = description
        .mapping
        .entries()
        .map(|entry| {
            (
                entry.key(),
                json!({
                    "value": entry.value(),
                    "source": entry.source().display().to_string(),
                }),
            )
        })
        .collect();

    let sources: Vec<String> = description
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let out = json!({
        "target": description.target.display().to_string(),
        "kind": description.kind,
        "sources": sources,
        "entries": entries,
        "diagnostics": description.diagnostics,
    });

    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}
