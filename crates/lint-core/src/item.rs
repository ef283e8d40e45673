//! Lint item model: spans, items, and severity classification.
//!
//! A lint item is one diagnostic finding produced by an external linter. Items
//! are plain owned data, built fresh per lint pass; this module stores what the
//! producer sent and performs no validation of its own.

use crate::annotation::AceAnnotation;
use crate::position::LintPosition;

/// A (start, end) pair of positions delimiting a range in text.
///
/// Producers are expected to emit `start <= end` under (row, column)
/// lexicographic order; this type neither enforces nor normalizes that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintSpan {
    /// First position of the span.
    pub start: LintPosition,
    /// Last position of the span.
    pub end: LintPosition,
}

impl LintSpan {
    /// Create a new span.
    pub fn new(start: LintPosition, end: LintPosition) -> Self {
        Self { start, end }
    }
}

/// Severity classes for the well-known marker labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error markers.
    Error,
    /// Warning markers.
    Warning,
    /// Informational markers.
    Info,
    /// Style markers.
    Style,
}

impl LintSeverity {
    /// Convert a marker label into a severity class.
    ///
    /// Returns `None` for labels outside the well-known set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "style" => Some(Self::Style),
            _ => None,
        }
    }

    /// The canonical wire label for this severity class.
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Style => "style",
        }
    }
}

/// A single lint diagnostic reported by an external linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintItem {
    /// The (start, end) span the finding covers.
    pub span: LintSpan,
    /// Human-readable diagnostic message.
    pub text: String,
    /// Raw severity/category label, as emitted by the producer (e.g. `"warning"`).
    pub typ: String,
}

impl LintItem {
    /// Create a new lint item.
    pub fn new(span: LintSpan, text: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
            typ: typ.into(),
        }
    }

    /// First row of the span.
    pub fn start_row(&self) -> usize {
        self.span.start.row
    }

    /// First column of the span.
    pub fn start_column(&self) -> usize {
        self.span.start.column
    }

    /// Last row of the span.
    pub fn end_row(&self) -> usize {
        self.span.end.row
    }

    /// Last column of the span.
    pub fn end_column(&self) -> usize {
        self.span.end.column
    }

    /// Classify the raw label into a known severity class.
    ///
    /// Returns `None` for labels this pipeline does not recognize; the raw
    /// label itself still flows through annotation conversion unchanged.
    pub fn severity(&self) -> Option<LintSeverity> {
        LintSeverity::from_label(&self.typ)
    }

    /// Convert this item into an editor annotation anchored at the span's
    /// start position.
    ///
    /// The end position is dropped: annotations mark a single anchor point,
    /// so this is a lossy, one-way projection.
    pub fn as_ace_annotation(&self) -> AceAnnotation {
        AceAnnotation::new(
            self.span.start.row,
            self.span.start.column,
            self.text.clone(),
            self.typ.clone(),
        )
    }
}
