#![warn(missing_docs)]
//! `lint-core-ace` - Ace editor integration for `lint-core`.
//!
//! This crate contains the JSON wire boundary between an external linter and an
//! Ace-style editor widget: parsing marker payloads into typed
//! [`lint_core::LintItem`]s and emitting the annotation arrays the widget
//! consumes.

mod error;
pub mod markers;

pub use error::AceLintError;
pub use markers::{
    KEY_END_COLUMN, KEY_END_ROW, KEY_START_COLUMN, KEY_START_ROW, KEY_TEXT, KEY_TYPE,
    annotation_to_value, annotations_to_value, lint_item_from_value, lint_items_from_value,
    markers_to_annotations_value, parse_lint_markers,
};
