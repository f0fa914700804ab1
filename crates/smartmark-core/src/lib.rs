#![warn(missing_docs)]
//! Smartmark Core - Headless Smart-Markup Engine for Note Editing
//!
//! # Overview
//!
//! `smartmark-core` is a headless selection-expansion and markup-toggle engine for
//! markdown-flavored note editing. Given a cursor or selection inside a plain-text
//! document, it expands the selection to a sensible logical unit (word,
//! whitespace-delimited code token, or an already-delimited region), detects whether
//! that span is already wrapped in a target markup pair, and idempotently adds or
//! removes the wrapping - relocating the cursor sanely and keeping every other
//! concurrently active cursor correctly positioned.
//!
//! It does not parse markdown and holds no UI state: the host supplies its
//! buffer/editor object behind the [`EditBuffer`] capability trait, and the engine
//! only ever uses the operations that trait names.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Markup Toggle Engine (multi-cursor pass)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Span Expansion (trim / words / growth)     │  ← Operative spans
//! ├─────────────────────────────────────────────┤
//! │  Boundary Predicates                        │  ← Context classification
//! ├─────────────────────────────────────────────┤
//! │  Position/Offset Adapter                    │  ← Coordinates
//! ├─────────────────────────────────────────────┤
//! │  EditBuffer (host capability trait)         │  ← Buffer access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use smartmark_core::{Action, EditBuffer, MarkupEngine, NoteBuffer, Position, Span};
//! use smartmark_markup::MarkupPair;
//!
//! let mut doc = NoteBuffer::new("a foo b");
//! doc.set_cursors(vec![Span::caret(Position::new(0, 3))]);
//!
//! let engine = MarkupEngine::new();
//! let cursors = doc.cursors();
//! engine.apply(&mut doc, &Action::Wrap(MarkupPair::bold()), &cursors);
//!
//! assert_eq!(doc.text(), "a **foo** b");
//! assert_eq!(doc.selection(), Span::caret(Position::new(0, 5)));
//!
//! // Toggling again restores the original text and cursor exactly.
//! let cursors = doc.cursors();
//! engine.apply(&mut doc, &Action::Wrap(MarkupPair::bold()), &cursors);
//! assert_eq!(doc.text(), "a foo b");
//! assert_eq!(doc.selection(), Span::caret(Position::new(0, 3)));
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - the host buffer capability trait and a rope-backed implementation
//! - [`position`] - positions, spans, and the clamped position/offset adapter
//! - [`boundary`] - markup boundary predicates
//! - [`expand`] - the span expansion engine
//! - [`toggle`] - the markup toggle engine and multi-cursor pass
//! - [`special`] - smart delete, case cycling, heading adjustment
//!
//! # Unicode Support
//!
//! Coordinates count characters, not bytes. Word expansion follows Unicode word
//! segmentation, so CJK text resolves to individual words instead of greedily
//! swallowing neighbors, while inline code and math expand over whitespace-delimited
//! tokens regardless of script.

pub mod boundary;
pub mod buffer;
pub mod expand;
pub mod position;
pub mod special;
pub mod toggle;

pub use boundary::{has_block_wrap_around, has_delimiters_outside, is_multi_line};
pub use buffer::{EditBuffer, NoteBuffer};
pub use expand::{Expansion, expand_selection, trim_span, word_span_at};
pub use position::{Position, Span, to_offset, to_position};
pub use special::HeadingShift;
pub use toggle::{Action, MarkupEngine, ShiftLedger, ShiftRecord};

use smartmark_markup::MarkupPair;

/// Toggle a markup pair around every cursor, using the standard markdown
/// configuration.
pub fn toggle_markup<B: EditBuffer + ?Sized>(doc: &mut B, pair: &MarkupPair, cursors: &[Span]) {
    MarkupEngine::new().toggle_markup(doc, pair, cursors);
}

/// Expand and delete every cursor's selection, using the standard markdown
/// configuration.
pub fn smart_delete<B: EditBuffer + ?Sized>(doc: &mut B, cursors: &[Span]) {
    MarkupEngine::new().smart_delete(doc, cursors);
}

/// Expand and case-cycle every cursor's selection, using the standard markdown
/// configuration.
pub fn smart_case_cycle<B: EditBuffer + ?Sized>(doc: &mut B, cursors: &[Span]) {
    MarkupEngine::new().smart_case_cycle(doc, cursors);
}

/// Adjust the heading level under every cursor, using the standard markdown
/// configuration.
pub fn adjust_heading<B: EditBuffer + ?Sized>(doc: &mut B, shift: HeadingShift, cursors: &[Span]) {
    MarkupEngine::new().adjust_heading(doc, shift, cursors);
}
