//! Boundary predicates: where does a span sit relative to existing markup?
//!
//! All predicates are total. At document edges they return `false` instead of failing,
//! so callers never need to special-case the first or last line.

use crate::buffer::EditBuffer;
use crate::position::{Span, to_offset, to_position};

/// Returns `true` iff `opening` sits immediately before the span and `closing`
/// immediately after it.
///
/// Either delimiter may be empty; an empty delimiter always matches. At the document
/// edges, where there is no room for a delimiter, the answer is `false`.
pub fn has_delimiters_outside<B: EditBuffer + ?Sized>(
    doc: &B,
    span: Span,
    opening: &str,
    closing: &str,
) -> bool {
    let (from, to) = span.sorted();
    let start = to_offset(doc, from);
    let end = to_offset(doc, to);

    let opening_len = opening.chars().count();
    let closing_len = closing.chars().count();

    let Some(before_start) = start.checked_sub(opening_len) else {
        return false;
    };
    if end + closing_len > doc.char_count() {
        return false;
    }

    let before = doc.text_in(to_position(doc, before_start), to_position(doc, start));
    let after = doc.text_in(to_position(doc, end), to_position(doc, end + closing_len));
    before == opening && after == closing
}

/// Returns `true` iff the span's raw text contains a line break.
pub fn is_multi_line<B: EditBuffer + ?Sized>(doc: &B, span: Span) -> bool {
    let (from, to) = span.sorted();
    doc.text_in(from, to).contains('\n')
}

/// Returns `true` iff the line immediately before `first_line` starts with `opening` and
/// the line immediately after `last_line` starts with `closing`.
///
/// At the document start or end there is no line before/after, so the answer is `false`.
pub fn has_block_wrap_around<B: EditBuffer + ?Sized>(
    doc: &B,
    opening: &str,
    closing: &str,
    first_line: usize,
    last_line: usize,
) -> bool {
    if first_line == 0 {
        return false;
    }
    if last_line + 1 >= doc.line_count() {
        return false;
    }

    let before = doc.line_text(first_line - 1).unwrap_or_default();
    let after = doc.line_text(last_line + 1).unwrap_or_default();
    before.starts_with(opening) && after.starts_with(closing)
}
