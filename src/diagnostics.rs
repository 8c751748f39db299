//! Diagnostics collected while resolving and parsing description files.
//!
//! The core never logs directly. Parser and pipeline push diagnostics into a
//! caller-owned [`Diagnostics`] list; the binary decides how to surface them.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Note,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Description file the diagnostic refers to, when there is one.
    pub source: Option<PathBuf>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", source.display(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Ordered list of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, source: Option<&Path>, message: impl Into<String>) {
        self.push(Severity::Warning, source, message);
    }

    pub fn note(&mut self, source: Option<&Path>, message: impl Into<String>) {
        self.push(Severity::Note, source, message);
    }

    fn push(&mut self, severity: Severity, source: Option<&Path>, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity,
            source: source.map(Path::to_path_buf),
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
