//! Editor annotation values.
//!
//! Annotations are the UI-facing shape of a lint pass: one marker per finding,
//! anchored to a single (row, column) point. The surrounding editor widget
//! renders them (gutter icons, squiggles, tooltips); this module only builds
//! the values.

use crate::item::LintItem;

/// An editor-widget marker anchored to a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AceAnnotation {
    /// Anchor row for the marker.
    pub row: usize,
    /// Anchor column for the marker.
    pub column: usize,
    /// Message shown to the user.
    pub text: String,
    /// Marker style/severity label.
    pub typ: String,
}

impl AceAnnotation {
    /// Create a new annotation.
    pub fn new(row: usize, column: usize, text: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            row,
            column,
            text: text.into(),
            typ: typ.into(),
        }
    }
}

/// Convert an ordered sequence of lint items into editor annotations.
///
/// Order- and length-preserving: entry *i* of the output is the conversion of
/// item *i*. No deduplication, filtering, or sorting.
pub fn ace_annotations(items: &[LintItem]) -> Vec<AceAnnotation> {
    items.iter().map(LintItem::as_ace_annotation).collect()
}
