//! Logical positions, selection spans, and the clamped position/offset adapter.
//!
//! Offsets are **character counts** from document start (not bytes). They are bijective
//! with positions for the buffer's current content, but not stable across edits.

use crate::buffer::EditBuffer;
use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A selection span between an anchor and a head position.
///
/// The anchor and head are not ordered relative to each other; a span may be
/// "backwards" when the user selected right-to-left. Operations that need
/// directionality use [`Span::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The moving end of the selection.
    pub head: Position,
}

impl Span {
    /// Create a span from anchor and head.
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Create a degenerate span (a caret) at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Returns `true` when the span selects nothing (anchor equals head).
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The lesser of anchor and head.
    pub fn min(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The greater of anchor and head.
    pub fn max(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// The span's endpoints in document order.
    pub fn sorted(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }
}

/// Convert a position to a character offset from document start.
///
/// Out-of-range positions are clamped: a line past the end resolves to the last line, a
/// column past the line end resolves to the line end. Never an error.
pub fn to_offset<B: EditBuffer + ?Sized>(doc: &B, pos: Position) -> usize {
    let line_count = doc.line_count();
    if line_count == 0 {
        return 0;
    }

    let line = pos.line.min(line_count - 1);
    let mut offset = 0;
    for l in 0..line {
        offset += line_len(doc, l) + 1;
    }
    (offset + pos.column.min(line_len(doc, line))).min(doc.char_count())
}

/// Convert a character offset to a position.
///
/// Offsets past the end of the document are clamped to the document end. Never an error.
pub fn to_position<B: EditBuffer + ?Sized>(doc: &B, offset: usize) -> Position {
    let mut remaining = offset.min(doc.char_count());
    let line_count = doc.line_count();

    for line in 0..line_count {
        let len = line_len(doc, line);
        if remaining <= len {
            return Position::new(line, remaining);
        }
        remaining -= len + 1;
    }

    let last = line_count.saturating_sub(1);
    Position::new(last, line_len(doc, last))
}

/// The character at `offset`, or `None` past the document end.
pub(crate) fn char_at<B: EditBuffer + ?Sized>(doc: &B, offset: usize) -> Option<char> {
    if offset >= doc.char_count() {
        return None;
    }
    doc.text_in(to_position(doc, offset), to_position(doc, offset + 1))
        .chars()
        .next()
}

fn line_len<B: EditBuffer + ?Sized>(doc: &B, line: usize) -> usize {
    doc.line_text(line)
        .map(|text| text.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::NoteBuffer;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 4));
        assert_eq!(Position::new(1, 1), Position::new(1, 1));
    }

    #[test]
    fn test_span_sorted_handles_backwards_selection() {
        let span = Span::new(Position::new(1, 4), Position::new(0, 2));
        let (from, to) = span.sorted();
        assert_eq!(from, Position::new(0, 2));
        assert_eq!(to, Position::new(1, 4));
    }

    #[test]
    fn test_to_offset_round_trip() {
        let doc = NoteBuffer::new("ABC\nDEF\nGHI");

        assert_eq!(to_offset(&doc, Position::new(0, 0)), 0);
        assert_eq!(to_offset(&doc, Position::new(0, 2)), 2);
        assert_eq!(to_offset(&doc, Position::new(1, 0)), 4);
        assert_eq!(to_offset(&doc, Position::new(2, 0)), 8);

        assert_eq!(to_position(&doc, 0), Position::new(0, 0));
        assert_eq!(to_position(&doc, 2), Position::new(0, 2));
        assert_eq!(to_position(&doc, 4), Position::new(1, 0));
        assert_eq!(to_position(&doc, 8), Position::new(2, 0));
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        let doc = NoteBuffer::new("ab\ncd");

        assert_eq!(to_offset(&doc, Position::new(0, 99)), 2);
        assert_eq!(to_offset(&doc, Position::new(99, 0)), 3);
        assert_eq!(to_offset(&doc, Position::new(99, 99)), 5);
    }

    #[test]
    fn test_out_of_range_offsets_clamp() {
        let doc = NoteBuffer::new("ab\ncd");
        assert_eq!(to_position(&doc, 999), Position::new(1, 2));
    }

    #[test]
    fn test_cjk_offsets_count_characters() {
        let doc = NoteBuffer::new("你好\n世界");

        assert_eq!(to_offset(&doc, Position::new(1, 0)), 3);
        assert_eq!(to_position(&doc, 1), Position::new(0, 1));
        assert_eq!(to_position(&doc, 4), Position::new(1, 1));
    }

    #[test]
    fn test_char_at() {
        let doc = NoteBuffer::new("ab\ncd");
        assert_eq!(char_at(&doc, 0), Some('a'));
        assert_eq!(char_at(&doc, 2), Some('\n'));
        assert_eq!(char_at(&doc, 4), Some('d'));
        assert_eq!(char_at(&doc, 5), None);
    }
}
