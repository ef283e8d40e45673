//! JSON wire format for lint markers and Ace annotations.
//!
//! The linter delivers one lint pass as a JSON array of flat marker records:
//!
//! ```json
//! [{ "start.row": 2, "start.column": 5,
//!    "end.row": 2, "end.column": 9,
//!    "text": "unused variable", "type": "warning" }]
//! ```
//!
//! Span fields use dotted keys on a flat object, not nested objects. This is
//! the producer's wire contract and the only input format this module honors.
//! The editor consumes a JSON array of `{ row, column, text, type }` records.
//!
//! Parsing fails fast: a missing or mistyped field yields a typed error rather
//! than an annotation with holes in it. Annotation JSON is never parsed back
//! into lint items (the conversion drops the span end and cannot be reversed).

use crate::error::AceLintError;
use lint_core::{AceAnnotation, LintItem, LintPosition, LintSpan, ace_annotations};
use serde_json::{Value, json};

/// Wire key for the span's first row.
pub const KEY_START_ROW: &str = "start.row";
/// Wire key for the span's first column.
pub const KEY_START_COLUMN: &str = "start.column";
/// Wire key for the span's last row.
pub const KEY_END_ROW: &str = "end.row";
/// Wire key for the span's last column.
pub const KEY_END_COLUMN: &str = "end.column";
/// Wire key for the diagnostic message.
pub const KEY_TEXT: &str = "text";
/// Wire key for the severity/category label.
pub const KEY_TYPE: &str = "type";

fn usize_field(marker: &Value, key: &'static str) -> Result<usize, AceLintError> {
    let value = marker.get(key).ok_or(AceLintError::MissingField(key))?;
    let n = value.as_u64().ok_or(AceLintError::InvalidField {
        field: key,
        expected: "a non-negative integer",
    })?;
    Ok(n as usize)
}

fn str_field<'a>(marker: &'a Value, key: &'static str) -> Result<&'a str, AceLintError> {
    let value = marker.get(key).ok_or(AceLintError::MissingField(key))?;
    value.as_str().ok_or(AceLintError::InvalidField {
        field: key,
        expected: "a string",
    })
}

/// Parse a single marker record into a typed lint item.
///
/// All six keys are required; the first absent or mistyped one is reported.
pub fn lint_item_from_value(marker: &Value) -> Result<LintItem, AceLintError> {
    let start = LintPosition::new(
        usize_field(marker, KEY_START_ROW)?,
        usize_field(marker, KEY_START_COLUMN)?,
    );
    let end = LintPosition::new(
        usize_field(marker, KEY_END_ROW)?,
        usize_field(marker, KEY_END_COLUMN)?,
    );
    let text = str_field(marker, KEY_TEXT)?;
    let typ = str_field(marker, KEY_TYPE)?;
    Ok(LintItem::new(LintSpan::new(start, end), text, typ))
}

/// Parse a marker array into lint items.
///
/// Order-preserving; fails on the first malformed element, producing no
/// partial output.
pub fn lint_items_from_value(payload: &Value) -> Result<Vec<LintItem>, AceLintError> {
    let markers = payload.as_array().ok_or(AceLintError::ExpectedArray)?;
    let mut items = Vec::with_capacity(markers.len());
    for (index, marker) in markers.iter().enumerate() {
        if !marker.is_object() {
            return Err(AceLintError::ExpectedObject { index });
        }
        items.push(lint_item_from_value(marker)?);
    }
    Ok(items)
}

/// Parse a raw JSON payload from the linter into lint items.
pub fn parse_lint_markers(payload: &str) -> Result<Vec<LintItem>, AceLintError> {
    let value: Value = serde_json::from_str(payload)?;
    lint_items_from_value(&value)
}

/// Encode one annotation as the JSON record the editor widget consumes.
pub fn annotation_to_value(annotation: &AceAnnotation) -> Value {
    json!({
        "row": annotation.row,
        "column": annotation.column,
        "text": annotation.text,
        "type": annotation.typ,
    })
}

/// Encode annotations as a JSON array, preserving input order.
pub fn annotations_to_value(annotations: &[AceAnnotation]) -> Value {
    Value::Array(annotations.iter().map(annotation_to_value).collect())
}

/// Convert a raw linter payload directly into the annotation array for the
/// editor widget.
///
/// Each output record anchors at the matching marker's start position; end
/// positions do not appear in the output.
pub fn markers_to_annotations_value(payload: &str) -> Result<Value, AceLintError> {
    let items = parse_lint_markers(payload)?;
    Ok(annotations_to_value(&ace_annotations(&items)))
}
