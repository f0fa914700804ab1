//! Non-markup smart commands sharing the dispatch path: smart delete, case cycling, and
//! heading level adjustment.

use crate::boundary::{has_delimiters_outside, is_multi_line};
use crate::buffer::EditBuffer;
use crate::expand::expand_selection;
use crate::position::{Position, Span};
use regex::Regex;
use smartmark_markup::{SurroundingPair, TrimConfig};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) ").expect("literal pattern"));

/// Direction of a heading level adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingShift {
    /// Move toward deeper headings (`#` → `######`), adding `# ` to body text.
    Increase,
    /// Move toward body text (`######` → `#`, `#` → plain line).
    Decrease,
}

/// Expand the selection and delete it, absorbing one preceding space so deletion does
/// not leave a double space behind.
pub(crate) fn smart_delete<B: EditBuffer + ?Sized>(
    doc: &mut B,
    trimmed: Span,
    trim: &TrimConfig,
    surrounding: &[SurroundingPair],
) {
    let expansion = expand_selection(doc, trimmed, None, trim, surrounding);
    let (mut from, to) = expansion.span.sorted();

    if has_delimiters_outside(doc, expansion.span, " ", "") && from.column > 0 {
        from.column -= 1;
    }

    doc.replace(from, to, "");
    doc.set_selection(from, from);
}

/// Expand the selection and cycle its case: lower → Sentence → UPPER → lower, with
/// sentence case as the fallback for any other form.
pub(crate) fn cycle_case<B: EditBuffer + ?Sized>(
    doc: &mut B,
    trimmed: Span,
    trim: &TrimConfig,
    surrounding: &[SurroundingPair],
) {
    let expansion = expand_selection(doc, trimmed, None, trim, surrounding);
    let (from, to) = expansion.span.sorted();
    let text = doc.text_in(from, to);

    let next = if text == text.to_lowercase() {
        sentence_case(&text)
    } else if text == sentence_case(&text) {
        text.to_uppercase()
    } else if text == text.to_uppercase() {
        text.to_lowercase()
    } else {
        sentence_case(&text)
    };

    doc.replace(from, to, &next);
    doc.set_selection(expansion.pre_anchor, expansion.pre_head);
}

/// Uppercase the first cased character, lowercase everything after it. Leading
/// characters without case (digits, punctuation) are preserved.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    for c in chars.by_ref() {
        if c.to_lowercase().to_string() != c.to_uppercase().to_string() {
            out.extend(c.to_uppercase());
            break;
        }
        out.push(c);
    }
    for c in chars {
        out.extend(c.to_lowercase());
    }
    out
}

/// Adjust the heading level of the line(s) under the selection.
///
/// A multi-line selection touches only lines that already carry a heading and restores
/// the selection afterwards; a single-line selection moves the caret with the prefix
/// delta. Levels are capped in both directions: increase stops at `######`, decrease
/// stops at body text.
pub(crate) fn adjust_heading<B: EditBuffer + ?Sized>(
    doc: &mut B,
    trimmed: Span,
    shift: HeadingShift,
) {
    if is_multi_line(doc, trimmed) {
        let (from, to) = trimmed.sorted();
        for line in from.line..=to.line {
            let content = doc.line_text(line).unwrap_or_default();
            if heading_level(&content).is_some() {
                adjust_heading_line(doc, line, to.column, shift, true);
            }
        }
        doc.set_selection(from, to);
    } else {
        let head = trimmed.max();
        adjust_heading_line(doc, head.line, head.column, shift, false);
    }
}

fn heading_level(content: &str) -> Option<usize> {
    HEADING.captures(content).map(|caps| caps[1].len())
}

fn adjust_heading_line<B: EditBuffer + ?Sized>(
    doc: &mut B,
    line: usize,
    column: usize,
    shift: HeadingShift,
    multi: bool,
) {
    let content = doc.line_text(line).unwrap_or_default();
    let level = heading_level(&content);

    let (new_content, new_column) = match (shift, level) {
        (HeadingShift::Increase, Some(level)) if level < 6 => {
            (format!("#{}", content), column + 1)
        }
        // Already at the cap.
        (HeadingShift::Increase, Some(_)) => return,
        (HeadingShift::Increase, None) => (format!("# {}", content), column + 2),
        (HeadingShift::Decrease, Some(level)) if level > 1 => {
            (content[1..].to_string(), column.saturating_sub(1))
        }
        (HeadingShift::Decrease, Some(_)) if !multi => {
            (content[2..].to_string(), column.saturating_sub(2))
        }
        (HeadingShift::Decrease, Some(_)) => return,
        // Body text is the floor.
        (HeadingShift::Decrease, None) => return,
    };

    doc.set_line(line, &new_content);
    let caret = Position::new(line, new_column);
    doc.set_selection(caret, caret);
}
