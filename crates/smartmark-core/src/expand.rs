//! The span expansion engine: turns a raw cursor or selection into the operative span
//! markup is applied to.
//!
//! Expansion is a fixed pipeline: trim the raw span, expand both ends to word
//! boundaries, union, re-trim, then grow over bracket-like pairs sitting directly
//! outside. Word boundaries come from the host for ordinary markup, but inline code and
//! inline math expand to whitespace-delimited tokens instead, since code content may
//! contain punctuation that word segmentation would split on.

use crate::boundary::has_delimiters_outside;
use crate::buffer::EditBuffer;
use crate::position::{Position, Span, char_at, to_offset, to_position};
use regex::Regex;
use smartmark_markup::{MarkupPair, SurroundingPair, TrimConfig};
use std::sync::LazyLock;

static BLOCK_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \^\w+$").expect("literal pattern"));

/// The result of expanding a cursor to its operative span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// The span markup will be applied to or removed from.
    pub span: Span,
    /// Anchor of the trimmed selection before word expansion, for cursor restoration.
    pub pre_anchor: Position,
    /// Head of the trimmed selection before word expansion, for cursor restoration.
    pub pre_head: Position,
}

/// The word span at `pos` for the given markup pair.
///
/// Ordinary pairs use the host's word-boundary notion, falling back to a caret when no
/// word is nearby. Whitespace-delimited pairs (inline code, inline math) instead scan
/// outward from `pos` until whitespace or a document boundary on either side.
///
/// `current` is the selection being expanded: a caret already sitting directly inside
/// the pair's delimiters stays degenerate, so toggling directly between delimiters
/// removes them instead of expanding into neighboring text.
pub fn word_span_at<B: EditBuffer + ?Sized>(
    doc: &B,
    pos: Position,
    pair: Option<&MarkupPair>,
    current: Span,
) -> Span {
    if let Some(pair) = pair
        && current.is_empty()
        && has_delimiters_outside(doc, current, &pair.opening, &pair.closing)
    {
        return Span::caret(pos);
    }

    if let Some(pair) = pair
        && pair.is_whitespace_delimited()
    {
        let offset = to_offset(doc, pos);

        let mut start = offset;
        while start > 0 {
            match char_at(doc, start - 1) {
                Some(c) if !c.is_whitespace() => start -= 1,
                _ => break,
            }
        }

        let mut end = offset;
        while let Some(c) = char_at(doc, end) {
            if c.is_whitespace() {
                break;
            }
            end += 1;
        }

        return Span::new(to_position(doc, start), to_position(doc, end));
    }

    doc.word_boundary_at(pos).unwrap_or(Span::caret(pos))
}

/// Strip trim tokens off both ends of the span, plus any trailing block-reference
/// suffix (`" ^id"`).
///
/// Tokens are stripped repeatedly until none applies or the span becomes empty. The
/// result is a forward span; a span that trims to nothing collapses to a caret at its
/// trimmed start.
pub fn trim_span<B: EditBuffer + ?Sized>(doc: &B, span: Span, trim: &TrimConfig) -> Span {
    let (from, to) = span.sorted();
    let mut text = doc.text_in(from, to);
    let mut start = to_offset(doc, from);

    loop {
        let mut clean = 0;
        for token in &trim.before {
            if !token.is_empty() && text.starts_with(token.as_str()) {
                start += token.chars().count();
                text = text[token.len()..].to_string();
            } else {
                clean += 1;
            }
        }
        if clean == trim.before.len() || text.is_empty() {
            break;
        }
    }

    loop {
        let mut clean = 0;
        for token in &trim.after {
            if !token.is_empty() && text.ends_with(token.as_str()) {
                text.truncate(text.len() - token.len());
            } else {
                clean += 1;
            }
        }
        if clean == trim.after.len() || text.is_empty() {
            break;
        }
    }

    if let Some(found) = BLOCK_REF.find(&text) {
        text.truncate(found.start());
    }

    let end = start + text.chars().count();
    Span::new(to_position(doc, start), to_position(doc, end))
}

/// Expand a raw cursor or selection to its operative span.
///
/// Returns the pre-expansion anchor/head as well, since a single-line toggle restores
/// the user's original cursor afterwards.
pub fn expand_selection<B: EditBuffer + ?Sized>(
    doc: &B,
    raw: Span,
    pair: Option<&MarkupPair>,
    trim: &TrimConfig,
    surrounding: &[SurroundingPair],
) -> Expansion {
    let trimmed = trim_span(doc, raw, trim);
    let pre_anchor = trimmed.min();
    let pre_head = trimmed.max();

    let first = word_span_at(doc, pre_anchor, pair, trimmed);
    let mut last = word_span_at(doc, pre_head, pair, trimmed);

    // Head re-probe for scripts without whitespace-delimited words: a head sitting on a
    // word-segmentation boundary must not swallow the following word.
    if pre_anchor != pre_head && pre_head.column > 0 {
        let inner = word_span_at(
            doc,
            Position::new(pre_head.line, pre_head.column - 1),
            pair,
            trimmed,
        );
        if inner != last {
            last = inner;
        }
    }

    let mut word_union = Span::new(first.anchor, last.head);
    let mut operative = trim_span(doc, word_union, trim);

    // Growing over surrounding pairs has to come after trimming so brackets directly
    // outside the trimmed span are seen. The command's own pair is excluded to keep
    // self-undo possible.
    for grow in surrounding {
        if let Some(pair) = pair
            && (grow.opening == pair.opening || grow.closing == pair.closing)
        {
            continue;
        }

        if has_delimiters_outside(doc, operative, &grow.opening, &grow.closing) {
            word_union.anchor.column = word_union
                .anchor
                .column
                .saturating_sub(grow.opening.chars().count());
            word_union.head.column += grow.closing.chars().count();
            if grow.trim_last_space {
                word_union.head.column = word_union.head.column.saturating_sub(1);
            }
            operative = word_union;
        }
    }

    Expansion {
        span: operative,
        pre_anchor,
        pre_head,
    }
}
