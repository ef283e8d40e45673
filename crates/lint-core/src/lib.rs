#![warn(missing_docs)]
//! `lint-core` - Typed lint diagnostics model.
//!
//! # Overview
//!
//! `lint-core` models the output of one lint pass as plain typed values: a linter
//! (an external collaborator, out of scope here) reports findings as *lint items*,
//! each carrying a (start, end) span, a human-readable message, and a severity
//! label. An editor widget consumes *annotations*, each anchored to a single
//! (row, column) point. This crate holds both shapes and the one-way projection
//! between them.
//!
//! The crate is headless: it performs no linting, no rendering, and no I/O. Wire
//! formats live in the companion integration crate `lint-core-ace`.
//!
//! # Quick Start
//!
//! ```rust
//! use lint_core::{LintItem, LintPosition, LintSpan, ace_annotations};
//!
//! let item = LintItem::new(
//!     LintSpan::new(LintPosition::new(2, 5), LintPosition::new(2, 9)),
//!     "unused variable",
//!     "warning",
//! );
//!
//! // Annotations anchor at the span's start; the end position is dropped.
//! let annotation = item.as_ace_annotation();
//! assert_eq!(annotation.row, 2);
//! assert_eq!(annotation.column, 5);
//!
//! let annotations = ace_annotations(std::slice::from_ref(&item));
//! assert_eq!(annotations.len(), 1);
//! ```
//!
//! # Module Description
//!
//! - [`position`] - zero-based (row, column) positions with lexicographic order
//! - [`item`] - lint spans, lint items, and severity classification
//! - [`annotation`] - editor annotation values and item conversion
//! - [`summary`] - per-severity counts over a lint pass

pub mod annotation;
pub mod item;
pub mod position;
pub mod summary;

pub use annotation::{AceAnnotation, ace_annotations};
pub use item::{LintItem, LintSeverity, LintSpan};
pub use position::LintPosition;
pub use summary::LintSummary;
