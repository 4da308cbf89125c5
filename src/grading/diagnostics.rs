//! Problems found while grading a feedback document.
//!
//! Nothing here aborts a scan: each condition is recorded and the caller
//! decides whether enough data survived to write grades.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::markers::GradeLine;

/// Which marker table a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Quality,
    Testing,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quality => "quality",
            Self::Testing => "testing",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("Missing colon on {section} section {marker}")]
    MissingColon {
        section: Section,
        marker: &'static str,
        line: usize,
    },

    #[error("No mark for {section} section {marker}")]
    UnparsableMark {
        section: Section,
        marker: &'static str,
        line: usize,
        text: String,
    },

    #[error("Missing {section} section {marker}")]
    MissingSection {
        section: Section,
        marker: &'static str,
    },

    #[error("Missing ] on marker {marker}")]
    MissingBracket { marker: &'static str, line: usize },

    #[error("Invalid max marks on marker {marker}")]
    InvalidMaxMark {
        marker: &'static str,
        line: usize,
        text: String,
    },

    #[error("Missing max marks on marker {marker}")]
    MissingMaxMark { marker: &'static str },

    #[error("Mark greater than maximum on marker {marker} ({} > {})", num(.mark), num(.max))]
    MarkAboveMax {
        marker: &'static str,
        mark: f64,
        max: f64,
    },

    #[error("Mark less than 0 on marker {marker} ({} < 0)", num(.mark))]
    MarkBelowZero { marker: &'static str, mark: f64 },

    #[error("Missing colon on overall {} grade line", .grade.label())]
    MissingGradeColon { grade: GradeLine, line: usize },

    #[error("Invalid overall {} grade line", .grade.label())]
    MissingGradeLine { grade: GradeLine },
}

fn num(value: &f64) -> String {
    super::calc::format_grade(*value)
}

impl Diagnostic {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MarkBelowZero { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Zero-based document line the problem was found on, when it has one.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MissingColon { line, .. }
            | Self::UnparsableMark { line, .. }
            | Self::MissingBracket { line, .. }
            | Self::InvalidMaxMark { line, .. }
            | Self::MissingGradeColon { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Ordered collection of diagnostics from one command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(severity = ?diagnostic.severity(), "{diagnostic}");
        crate::perf::log_event("diagnostic", diagnostic.to_string());
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
