use smartmark_core::{EditBuffer, MarkupEngine, NoteBuffer, Position, Span};
use smartmark_markup::MarkupPair;

fn caret(line: usize, column: usize) -> Span {
    Span::caret(Position::new(line, column))
}

fn selection(line: usize, from: usize, to: usize) -> Span {
    Span::new(Position::new(line, from), Position::new(line, to))
}

#[test]
fn test_bold_round_trip_from_caret() {
    let mut doc = NoteBuffer::new("a foo b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[caret(0, 3)]);
    assert_eq!(doc.text(), "a **foo** b");
    assert_eq!(doc.selection(), caret(0, 5));

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &cursors);
    assert_eq!(doc.text(), "a foo b");
    assert_eq!(doc.selection(), caret(0, 3));
}

#[test]
fn test_bold_round_trip_from_selection() {
    let mut doc = NoteBuffer::new("a foo b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[selection(0, 2, 5)]);
    assert_eq!(doc.text(), "a **foo** b");
    assert_eq!(doc.selection(), selection(0, 4, 7));

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &cursors);
    assert_eq!(doc.text(), "a foo b");
    assert_eq!(doc.selection(), selection(0, 2, 5));
}

#[test]
fn test_italics_toggle() {
    let mut doc = NoteBuffer::new("word");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::italics(), &[caret(0, 2)]);
    assert_eq!(doc.text(), "*word*");

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::italics(), &cursors);
    assert_eq!(doc.text(), "word");
}

#[test]
fn test_inline_code_round_trip_is_whitespace_delimited() {
    let mut doc = NoteBuffer::new("x a.b(c) y");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::inline_code(), &[caret(0, 4)]);
    assert_eq!(doc.text(), "x `a.b(c)` y");
    assert_eq!(doc.selection(), caret(0, 5));

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::inline_code(), &cursors);
    assert_eq!(doc.text(), "x a.b(c) y");
    assert_eq!(doc.selection(), caret(0, 4));
}

#[test]
fn test_inline_math_round_trip() {
    let mut doc = NoteBuffer::new("a x+y b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::inline_math(), &[caret(0, 3)]);
    assert_eq!(doc.text(), "a $x+y$ b");

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::inline_math(), &cursors);
    assert_eq!(doc.text(), "a x+y b");
}

#[test]
fn test_comment_inserts_padding_spaces() {
    let mut doc = NoteBuffer::new("a foo b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::comment(), &[caret(0, 3)]);
    assert_eq!(doc.text(), "a %% foo %% b");
    assert_eq!(doc.selection(), caret(0, 6));
}

#[test]
fn test_comment_round_trip_restores_text_and_cursor() {
    let mut doc = NoteBuffer::new("a foo b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::comment(), &[caret(0, 3)]);
    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::comment(), &cursors);

    assert_eq!(doc.text(), "a foo b");
    assert_eq!(doc.selection(), caret(0, 3));
}

#[test]
fn test_html_comment_round_trip() {
    let mut doc = NoteBuffer::new("note here");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::html_comment(), &[caret(0, 1)]);
    assert_eq!(doc.text(), "<!-- note --> here");

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::html_comment(), &cursors);
    assert_eq!(doc.text(), "note here");
}

#[test]
fn test_unpadded_comment_still_removes() {
    let mut doc = NoteBuffer::new("a %%foo%% b");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::comment(), &[caret(0, 5)]);
    assert_eq!(doc.text(), "a foo b");
}

#[test]
fn test_highlight_round_trip() {
    let mut doc = NoteBuffer::new("key point");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::highlight(), &[selection(0, 0, 9)]);
    assert_eq!(doc.text(), "==key point==");

    let cursors = doc.cursors();
    engine.toggle_markup(&mut doc, &MarkupPair::highlight(), &cursors);
    assert_eq!(doc.text(), "key point");
}

#[test]
fn test_toggle_at_document_edges_does_not_panic() {
    let mut doc = NoteBuffer::new("foo");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[caret(0, 0)]);
    assert_eq!(doc.text(), "**foo**");

    let mut doc = NoteBuffer::new("");
    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[caret(0, 0)]);
    assert_eq!(doc.text(), "****");
}

#[test]
fn test_wrap_grows_over_wiki_brackets() {
    let mut doc = NoteBuffer::new("see [[foo]] ok");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[caret(0, 7)]);
    assert_eq!(doc.text(), "see **[[foo]]** ok");
}

#[test]
fn test_trim_keeps_list_marker_outside_markup() {
    let mut doc = NoteBuffer::new("- item text");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::bold(), &[selection(0, 0, 11)]);
    assert_eq!(doc.text(), "- **item text**");
}

#[test]
fn test_trim_keeps_block_reference_outside_markup() {
    let mut doc = NoteBuffer::new("fact ^ab12");
    let engine = MarkupEngine::new();

    engine.toggle_markup(&mut doc, &MarkupPair::highlight(), &[selection(0, 0, 10)]);
    assert_eq!(doc.text(), "==fact== ^ab12");
}
