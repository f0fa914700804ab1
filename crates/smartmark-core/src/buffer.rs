//! The host buffer capability interface and a rope-backed implementation.
//!
//! The engine never touches a concrete host type: everything it needs from the host's
//! editor object is captured by [`EditBuffer`]. [`NoteBuffer`] is a self-contained
//! implementation over a rope, used by hosts without an editor object of their own and
//! by this crate's tests.

use crate::position::{Position, Span};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// The buffer/editor operations the engine needs from its host.
///
/// Positions handed to these methods may be out of range; implementations clamp them to
/// the nearest valid location rather than failing.
pub trait EditBuffer {
    /// Total number of logical lines. An empty document has one (empty) line.
    fn line_count(&self) -> usize;

    /// Text of the given line without its trailing line break, or `None` past the end.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Replace the full text of the given line, keeping its line break.
    fn set_line(&mut self, line: usize, text: &str);

    /// Total number of characters in the document.
    fn char_count(&self) -> usize;

    /// The text between two positions, in document order.
    fn text_in(&self, from: Position, to: Position) -> String;

    /// Replace the text between two positions.
    fn replace(&mut self, from: Position, to: Position, text: &str);

    /// The current primary selection.
    fn selection(&self) -> Span;

    /// Set the primary selection, collapsing any secondary cursors.
    fn set_selection(&mut self, anchor: Position, head: Position);

    /// All active cursors in host-reported order (the primary included).
    fn cursors(&self) -> Vec<Span>;

    /// The host's word-boundary notion at `pos`: the word span under or directly before
    /// the position, or `None` when no word is nearby.
    fn word_boundary_at(&self, pos: Position) -> Option<Span>;
}

/// An in-memory buffer over a rope, with selection and multi-cursor state.
///
/// Word boundaries follow Unicode word segmentation, so CJK text resolves to
/// single-character words instead of greedily swallowing neighbors.
pub struct NoteBuffer {
    rope: Rope,
    cursors: Vec<Span>,
}

impl NoteBuffer {
    /// Create a buffer holding `text`, with a single caret at the document start.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursors: vec![Span::caret(Position::new(0, 0))],
        }
    }

    /// The complete document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the active cursor set. An empty list resets to a caret at the start.
    pub fn set_cursors(&mut self, cursors: Vec<Span>) {
        if cursors.is_empty() {
            self.cursors = vec![Span::caret(Position::new(0, 0))];
        } else {
            self.cursors = cursors;
        }
    }

    fn line_len_chars(&self, line: usize) -> usize {
        let start = self.rope.line_to_char(line);
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - start - 1
        } else {
            self.rope.len_chars() - start
        }
    }

    fn pos_to_char(&self, pos: Position) -> usize {
        let last = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last);
        let start = self.rope.line_to_char(line);
        start + pos.column.min(self.line_len_chars(line))
    }

    fn char_range(&self, from: Position, to: Position) -> (usize, usize) {
        let a = self.pos_to_char(from);
        let b = self.pos_to_char(to);
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl EditBuffer for NoteBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    fn set_line(&mut self, line: usize, text: &str) {
        if line >= self.rope.len_lines() {
            return;
        }

        let start = self.rope.line_to_char(line);
        let len = self.line_len_chars(line);
        self.rope.remove(start..start + len);
        self.rope.insert(start, text);
    }

    fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    fn text_in(&self, from: Position, to: Position) -> String {
        let (a, b) = self.char_range(from, to);
        self.rope.slice(a..b).to_string()
    }

    fn replace(&mut self, from: Position, to: Position, text: &str) {
        let (a, b) = self.char_range(from, to);
        self.rope.remove(a..b);
        self.rope.insert(a, text);
    }

    fn selection(&self) -> Span {
        self.cursors
            .first()
            .copied()
            .unwrap_or(Span::caret(Position::new(0, 0)))
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.cursors = vec![Span::new(anchor, head)];
    }

    fn cursors(&self) -> Vec<Span> {
        self.cursors.clone()
    }

    fn word_boundary_at(&self, pos: Position) -> Option<Span> {
        let text = self.line_text(pos.line)?;
        let column = pos.column.min(text.chars().count());

        let mut segments = Vec::new();
        let mut char_start = 0;
        for (_, segment) in text.split_word_bound_indices() {
            let char_end = char_start + segment.chars().count();
            segments.push((char_start, char_end, segment));
            char_start = char_end;
        }

        let containing = segments
            .iter()
            .find(|(start, end, _)| *start <= column && column < *end);
        if let Some((start, end, segment)) = containing
            && is_word_like(segment)
        {
            return Some(Span::new(
                Position::new(pos.line, *start),
                Position::new(pos.line, *end),
            ));
        }

        let ending = segments.iter().find(|(_, end, _)| *end == column);
        if let Some((start, end, segment)) = ending
            && is_word_like(segment)
        {
            return Some(Span::new(
                Position::new(pos.line, *start),
                Position::new(pos.line, *end),
            ));
        }

        None
    }
}

fn is_word_like(segment: &str) -> bool {
    segment.chars().any(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_access() {
        let doc = NoteBuffer::new("Line 1\nLine 2\nLine 3");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(1), Some("Line 2".to_string()));
        assert_eq!(doc.line_text(10), None);
    }

    #[test]
    fn test_set_line_keeps_line_break() {
        let mut doc = NoteBuffer::new("aaa\nbbb\nccc");
        doc.set_line(1, "BBB!");
        assert_eq!(doc.text(), "aaa\nBBB!\nccc");
    }

    #[test]
    fn test_replace_range() {
        let mut doc = NoteBuffer::new("Hello World");
        doc.replace(Position::new(0, 6), Position::new(0, 11), "Rust");
        assert_eq!(doc.text(), "Hello Rust");
    }

    #[test]
    fn test_replace_handles_backwards_positions() {
        let mut doc = NoteBuffer::new("Hello World");
        doc.replace(Position::new(0, 11), Position::new(0, 6), "Rust");
        assert_eq!(doc.text(), "Hello Rust");
    }

    #[test]
    fn test_word_boundary_inside_word() {
        let doc = NoteBuffer::new("héllo wörld");
        let span = doc.word_boundary_at(Position::new(0, 8)).unwrap();
        assert_eq!(span.anchor, Position::new(0, 6));
        assert_eq!(span.head, Position::new(0, 11));
    }

    #[test]
    fn test_word_boundary_at_word_end() {
        let doc = NoteBuffer::new("foo bar");
        let span = doc.word_boundary_at(Position::new(0, 3)).unwrap();
        assert_eq!(span.anchor, Position::new(0, 0));
        assert_eq!(span.head, Position::new(0, 3));
    }

    #[test]
    fn test_word_boundary_in_whitespace_is_none() {
        let doc = NoteBuffer::new("foo  bar");
        assert!(doc.word_boundary_at(Position::new(0, 4)).is_none());
    }

    #[test]
    fn test_word_boundary_cjk_single_character() {
        let doc = NoteBuffer::new("这是中文");
        let span = doc.word_boundary_at(Position::new(0, 2)).unwrap();
        assert!(span.head.column - span.anchor.column <= 2);
        assert!(span.anchor.column <= 2 && 2 < span.head.column || span.head.column == 2);
    }

    #[test]
    fn test_cursor_state() {
        let mut doc = NoteBuffer::new("abc");
        doc.set_cursors(vec![
            Span::caret(Position::new(0, 1)),
            Span::caret(Position::new(0, 2)),
        ]);
        assert_eq!(doc.cursors().len(), 2);

        doc.set_selection(Position::new(0, 0), Position::new(0, 3));
        assert_eq!(doc.cursors().len(), 1);
        assert_eq!(doc.selection(), Span::new(Position::new(0, 0), Position::new(0, 3)));
    }
}
