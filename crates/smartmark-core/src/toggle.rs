//! The markup toggle engine: applies or removes delimiter pairs around operative spans,
//! single- or multi-line, while keeping every concurrently active cursor correctly
//! positioned.
//!
//! Edits are applied strictly sequentially, one cursor at a time. A per-invocation
//! shift ledger records the column delta each edit introduced on each line; cursors not
//! yet processed are recalibrated against it before their own toggle is computed, so
//! sequential edits behave as if computed against a consistent snapshot.

use crate::boundary::{has_block_wrap_around, has_delimiters_outside, is_multi_line};
use crate::buffer::EditBuffer;
use crate::expand::{Expansion, expand_selection, trim_span};
use crate::position::{Position, Span, to_offset, to_position};
use crate::special::{HeadingShift, adjust_heading, cycle_case, smart_delete};
use log::debug;
use smartmark_markup::{MarkupPair, SurroundingPair, TrimConfig};

/// One recorded column shift on a line, caused by an edit earlier in the same
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRecord {
    /// The line the edit happened on.
    pub line: usize,
    /// The column delta the edit introduced.
    pub shift: isize,
}

/// Append-only ledger of column shifts, scoped to one command invocation.
///
/// A position on line L accumulates the sum of all shifts recorded for line L so far.
#[derive(Debug, Default)]
pub struct ShiftLedger {
    records: Vec<ShiftRecord>,
}

impl ShiftLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column shift on a line.
    pub fn push(&mut self, line: usize, shift: isize) {
        self.records.push(ShiftRecord { line, shift });
    }

    /// Apply all shifts recorded for the position's line.
    pub fn recalibrate(&self, pos: Position) -> Position {
        let mut column = pos.column as isize;
        for record in &self.records {
            if record.line == pos.line {
                column += record.shift;
            }
        }
        Position::new(pos.line, column.max(0) as usize)
    }
}

/// An editing action dispatched through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle a markup pair around the operative span.
    Wrap(MarkupPair),
    /// Expand the selection and delete it.
    Delete,
    /// Expand the selection and cycle its case.
    CycleCase,
    /// Adjust the heading level of the selected line(s).
    Heading(HeadingShift),
}

/// What a single-span apply step actually did, with the total delimiter length
/// involved. Drives the running offset pointer of the per-line multi-line pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applied {
    Inserted(usize),
    Removed(usize),
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMode {
    Single,
    Multi,
}

/// The selection-expansion and markup-toggle engine.
///
/// Holds the trim token sets and the surrounding-pair expansion set used by every
/// invocation; [`MarkupEngine::default`] uses the standard markdown configuration.
#[derive(Debug, Clone)]
pub struct MarkupEngine {
    trim: TrimConfig,
    surrounding: Vec<SurroundingPair>,
}

impl Default for MarkupEngine {
    fn default() -> Self {
        Self {
            trim: TrimConfig::markdown(),
            surrounding: smartmark_markup::surrounding_pairs(),
        }
    }
}

impl MarkupEngine {
    /// Create an engine with the standard markdown configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom trim and surrounding-pair configuration.
    pub fn with_config(trim: TrimConfig, surrounding: Vec<SurroundingPair>) -> Self {
        Self { trim, surrounding }
    }

    /// Run an action for every cursor, in host-reported order.
    ///
    /// Each cursor is recalibrated against the shifts produced by the cursors processed
    /// before it, then trimmed and dispatched. The buffer's selection ends up wherever
    /// the last processed cursor put it.
    pub fn apply<B: EditBuffer + ?Sized>(&self, doc: &mut B, action: &Action, cursors: &[Span]) {
        let pair = match action {
            Action::Wrap(pair) => Some(pair),
            _ => None,
        };
        let trim = self.trim.for_pair(pair);
        let mut ledger = ShiftLedger::new();

        for cursor in cursors {
            let cursor = Span::new(
                ledger.recalibrate(cursor.anchor),
                ledger.recalibrate(cursor.head),
            );
            doc.set_selection(cursor.anchor, cursor.head);

            // Trimming first keeps triple-click-style whole-line selections from being
            // treated as multi-line.
            let trimmed = trim_span(doc, cursor, &trim);

            match action {
                Action::Delete => {
                    debug!("smart delete");
                    smart_delete(doc, trimmed, &trim, &self.surrounding);
                }
                Action::CycleCase => {
                    debug!("case cycle");
                    cycle_case(doc, trimmed, &trim, &self.surrounding);
                }
                Action::Heading(shift) => {
                    debug!("heading adjust");
                    adjust_heading(doc, trimmed, *shift);
                }
                Action::Wrap(pair) => {
                    if !is_multi_line(doc, trimmed) {
                        debug!("single-line toggle");
                        let expansion =
                            expand_selection(doc, trimmed, Some(pair), &trim, &self.surrounding);
                        apply_markup(doc, expansion, pair, LineMode::Single, &mut ledger);
                    } else if pair.is_block_style() {
                        debug!("block-style multi-line toggle");
                        wrap_multi_line_block(doc, trimmed, pair);
                    } else {
                        debug!("per-line multi-line toggle");
                        self.wrap_each_line(doc, trimmed, pair, &trim, &mut ledger);
                    }
                }
            }
        }
    }

    /// Toggle a markup pair around every cursor.
    pub fn toggle_markup<B: EditBuffer + ?Sized>(
        &self,
        doc: &mut B,
        pair: &MarkupPair,
        cursors: &[Span],
    ) {
        self.apply(doc, &Action::Wrap(pair.clone()), cursors);
    }

    /// Expand and delete every cursor's selection.
    pub fn smart_delete<B: EditBuffer + ?Sized>(&self, doc: &mut B, cursors: &[Span]) {
        self.apply(doc, &Action::Delete, cursors);
    }

    /// Expand and case-cycle every cursor's selection.
    pub fn smart_case_cycle<B: EditBuffer + ?Sized>(&self, doc: &mut B, cursors: &[Span]) {
        self.apply(doc, &Action::CycleCase, cursors);
    }

    /// Adjust the heading level under every cursor.
    pub fn adjust_heading<B: EditBuffer + ?Sized>(
        &self,
        doc: &mut B,
        shift: HeadingShift,
        cursors: &[Span],
    ) {
        self.apply(doc, &Action::Heading(shift), cursors);
    }

    /// Apply a pair to each line of a multi-line selection independently.
    ///
    /// A running offset pointer tracks the length delta earlier lines introduced, so
    /// later lines resolve to the right text even when some lines were already wrapped
    /// and others were not.
    fn wrap_each_line<B: EditBuffer + ?Sized>(
        &self,
        doc: &mut B,
        trimmed: Span,
        pair: &MarkupPair,
        trim: &TrimConfig,
        ledger: &mut ShiftLedger,
    ) {
        let (from, to) = trimmed.sorted();
        let text = doc.text_in(from, to);
        let mut pointer = to_offset(doc, from);
        let lines: Vec<&str> = text.split('\n').collect();
        debug!("wrapping {} lines", lines.len());

        for line in lines {
            let line_chars = line.chars().count();
            let start = to_position(doc, pointer);
            let end = to_position(doc, pointer + line_chars);
            doc.set_selection(start, end);

            let expansion =
                expand_selection(doc, Span::new(start, end), Some(pair), trim, &self.surrounding);
            pointer += line_chars + 1;

            match apply_markup(doc, expansion, pair, LineMode::Multi, ledger) {
                Applied::Inserted(delta) => pointer += delta,
                Applied::Removed(delta) => pointer -= delta,
                Applied::Skipped => {}
            }
        }
    }
}

/// Insert or remove the pair around the expanded span, recording shifts in the ledger.
///
/// Padding pairs fold their padding space into the effective delimiters, which makes
/// the removal predicate the exact inverse of what insertion produces; the unpadded
/// form is still recognized on removal.
fn apply_markup<B: EditBuffer + ?Sized>(
    doc: &mut B,
    expansion: Expansion,
    pair: &MarkupPair,
    mode: LineMode,
    ledger: &mut ShiftLedger,
) -> Applied {
    let Expansion {
        span,
        mut pre_anchor,
        mut pre_head,
    } = expansion;
    let (from, to) = span.sorted();
    let text = doc.text_in(from, to);

    // No markup on an empty line in the middle of a multi-line selection.
    if text.is_empty() && mode == LineMode::Multi {
        return Applied::Skipped;
    }

    let (opening, closing) = if pair.needs_padding() {
        (format!("{} ", pair.opening), format!(" {}", pair.closing))
    } else {
        (pair.opening.clone(), pair.closing.clone())
    };
    let blen = opening.chars().count();
    let alen = closing.chars().count();

    let start = to_offset(doc, from);
    let end = to_offset(doc, to);
    let text_chars = text.chars().count();

    let removal = if has_delimiters_outside(doc, span, &opening, &closing) {
        Some((blen, alen))
    } else if pair.needs_padding()
        && has_delimiters_outside(doc, span, &pair.opening, &pair.closing)
    {
        Some((pair.opening_len(), pair.closing_len()))
    } else {
        None
    };

    let applied = match removal {
        Some((blen, alen)) => {
            let wide_from = to_position(doc, start - blen);
            let wide_to = to_position(doc, end + alen);
            doc.replace(wide_from, wide_to, &text);

            ledger.push(pre_anchor.line, -(blen as isize));
            ledger.push(pre_head.line, -(alen as isize));
            pre_anchor.column = pre_anchor.column.saturating_sub(blen);
            pre_head.column = pre_head.column.saturating_sub(blen);

            let caret = to_position(doc, start - blen + text_chars);
            doc.set_selection(caret, caret);
            Applied::Removed(blen + alen)
        }
        None => {
            doc.replace(from, to, &format!("{}{}{}", opening, text, closing));

            ledger.push(pre_anchor.line, blen as isize);
            ledger.push(pre_head.line, alen as isize);
            pre_anchor.column += blen;
            pre_head.column += blen;

            let caret = to_position(doc, start + blen + text_chars + alen);
            doc.set_selection(caret, caret);
            Applied::Inserted(blen + alen)
        }
    };

    if mode == LineMode::Single {
        doc.set_selection(pre_anchor, pre_head);
    }
    applied
}

/// Toggle the block (standalone-line) form of a pair around a multi-line selection.
///
/// Inline code upgrades to a code fence and inline math to block math. Insertion puts
/// the opening delimiter on its own line above and the closing one below; for fenced
/// code the caret lands after the opening fence, ready for a language tag. When the
/// wrapping lines are already present, both are deleted instead.
fn wrap_multi_line_block<B: EditBuffer + ?Sized>(doc: &mut B, trimmed: Span, pair: &MarkupPair) {
    let (mut from, mut to) = trimmed.sorted();
    from.column = 0;
    to.column = doc
        .line_text(to.line)
        .map(|text| text.chars().count())
        .unwrap_or(0);

    let block = pair.block_form();

    if !has_block_wrap_around(doc, &block.opening, &block.closing, from.line, to.line) {
        doc.replace(from, from, &format!("{}\n", block.opening));
        let below = Position::new(to.line + 1, to.column);
        doc.replace(below, below, &format!("\n{}", block.closing));

        if block.opening == "```" {
            let fence = Position::new(from.line, 3);
            doc.set_selection(fence, fence);
        }
    } else {
        delete_line(doc, from.line - 1);
        // The closing line moved up by one with the deletion above.
        delete_line(doc, to.line);
    }
}

/// Remove a whole line including one adjacent line break.
fn delete_line<B: EditBuffer + ?Sized>(doc: &mut B, line: usize) {
    let last = doc.line_count().saturating_sub(1);
    let line_chars = |text: Option<String>| text.map(|t| t.chars().count()).unwrap_or(0);

    if line < last {
        doc.replace(Position::new(line, 0), Position::new(line + 1, 0), "");
    } else if line > 0 {
        let prev_end = Position::new(line - 1, line_chars(doc.line_text(line - 1)));
        let line_end = Position::new(line, line_chars(doc.line_text(line)));
        doc.replace(prev_end, line_end, "");
    } else {
        let line_end = Position::new(0, line_chars(doc.line_text(0)));
        doc.replace(Position::new(0, 0), line_end, "");
    }
}
