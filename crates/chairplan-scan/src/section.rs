//! Section detection: wall-delimited column ranges within one row.
//!
//! A section runs from one wall character to the next one. The closing
//! wall of a section opens the following section, so rooms separated by
//! a single wall (`|a|b|`) each get their own range:
//!
//! ```text
//! |a|b|
//! [  )      section [0, 3), interior 1..2
//!   [  )    section [2, 5), interior 3..4
//! ```
//!
//! The cursor only ever moves right, so a wall opens at most one section
//! and a row is scanned in O(width).

use std::ops::Range;

use chairplan_grammar::Symbol;

/// A half-open column range `[start, end)` bounded by walls at `start`
/// and `end - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSection {
    pub start: usize,
    pub end: usize,
}

impl RoomSection {
    /// The columns strictly between the two boundary walls.
    ///
    /// Empty for two adjacent walls.
    pub fn interior(&self) -> Range<usize> {
        self.start + 1..self.end - 1
    }

    /// Number of columns including both walls. Always at least 2.
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Finds every section of a row, left to right.
pub fn detect_sections(symbols: &[Symbol]) -> Vec<RoomSection> {
    let mut sections = Vec::new();
    let Some(mut cursor) = next_wall(symbols, 0) else {
        return sections;
    };

    while let Some(close) = next_wall(symbols, cursor + 1) {
        sections.push(RoomSection {
            start: cursor,
            end: close + 1,
        });
        cursor = close;
    }
    sections
}

/// Returns the first column holding content (not wall, not blank) that
/// lies outside every section: before the first wall or after the last
/// one.
pub fn stray_content(symbols: &[Symbol], sections: &[RoomSection]) -> Option<usize> {
    let (first, last) = match (sections.first(), sections.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        // Zero or one wall: nothing on this row is enclosed.
        _ => (symbols.len(), symbols.len()),
    };
    symbols[..first]
        .iter()
        .position(|s| s.is_content())
        .or_else(|| {
            symbols[last..]
                .iter()
                .position(|s| s.is_content())
                .map(|offset| last + offset)
        })
}

fn next_wall(symbols: &[Symbol], from: usize) -> Option<usize> {
    symbols
        .get(from..)?
        .iter()
        .position(|&s| s == Symbol::Wall)
        .map(|offset| from + offset)
}
