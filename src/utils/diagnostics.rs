//! Advisory diagnostics emitted by the formatting pipeline.
//!
//! Every check reports through a [`DiagnosticSet`] keyed by a stable id, so
//! re-running the pipeline over new input replaces earlier findings instead
//! of duplicating them. Nothing here is fatal: the pipeline always produces
//! a best-effort output alongside whatever diagnostics it asserts.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Severity level for a diagnostic (determines coloring and ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (cyan) - e.g., comments removed, styling stripped
    Info,
    /// Warnings (yellow) - e.g., short abstract, references present
    Warning,
    /// Serious problems (red) - e.g., complex TeX math, missing fullstop
    Danger,
}

/// Stable diagnostic ids. At most one diagnostic per id is active per run.
pub mod ids {
    pub const COMMENTED_LINES: &str = "commented-lines";
    pub const MULTIPLE_PARAGRAPHS: &str = "multiple-paragraphs";
    pub const ABSTRACT_PREFIX: &str = "abstract-prefix";
    pub const LENGTH: &str = "length";
    pub const PARAGRAPH_END: &str = "paragraph-end";
    pub const STRAY_QUESTION_MARK: &str = "stray-question-mark";
    pub const REFERENCES: &str = "references";
    pub const TEX_MATH: &str = "tex-math";
    pub const TEX_SYNTAX: &str = "tex-syntax";
    pub const SENTIMENT: &str = "sentiment";
}

/// A single advisory finding.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Stable id identifying the condition (see [`ids`])
    pub id: &'static str,
    /// Severity level (for coloring and host-side grouping)
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(id: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
        }
    }

    /// Get ANSI color code for this diagnostic's severity.
    pub fn color_code(&self) -> &'static str {
        match self.severity {
            Severity::Danger => "\x1b[31m",  // red
            Severity::Warning => "\x1b[33m", // yellow
            Severity::Info => "\x1b[36m",    // cyan
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.message)
    }
}

/// Ordered set of active diagnostics, at most one per id.
///
/// `assert` replaces any earlier finding with the same id; `retract` removes
/// one cleanly. A fresh set is built per pipeline run, so stale findings
/// never survive an input change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DiagnosticSet {
    entries: IndexMap<&'static str, Diagnostic>,
}

impl DiagnosticSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert a finding for `id`, replacing any prior one.
    pub fn assert(&mut self, id: &'static str, severity: Severity, message: impl Into<String>) {
        self.entries.insert(id, Diagnostic::new(id, severity, message));
    }

    /// Retract the finding for `id`, if any.
    pub fn retract(&mut self, id: &str) {
        self.entries.shift_remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&Diagnostic> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any active finding has [`Severity::Danger`].
    pub fn has_danger(&self) -> bool {
        self.iter().any(|d| d.severity == Severity::Danger)
    }
}

impl<'a> IntoIterator for &'a DiagnosticSet {
    type Item = &'a Diagnostic;
    type IntoIter = indexmap::map::Values<'a, &'static str, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_replaces_instead_of_duplicating() {
        let mut set = DiagnosticSet::new();
        set.assert(ids::LENGTH, Severity::Warning, "too short");
        set.assert(ids::LENGTH, Severity::Danger, "way too long");
        assert_eq!(set.len(), 1);
        let diag = set.get(ids::LENGTH).unwrap();
        assert_eq!(diag.severity, Severity::Danger);
        assert_eq!(diag.message, "way too long");
    }

    #[test]
    fn retract_removes_cleanly() {
        let mut set = DiagnosticSet::new();
        set.assert(ids::REFERENCES, Severity::Warning, "references found");
        set.retract(ids::REFERENCES);
        assert!(set.is_empty());
        assert!(set.get(ids::REFERENCES).is_none());
    }

    #[test]
    fn serializes_as_id_keyed_map() {
        let mut set = DiagnosticSet::new();
        set.assert(ids::TEX_MATH, Severity::Danger, "complex math");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["tex-math"]["severity"], "danger");
    }
}
