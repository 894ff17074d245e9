//! Per-column region state carried from one row to the next.
//!
//! Two buffers are kept: `previous` (the row above, read-only while a row
//! is resolved) and `current` (the row being built). [`commit`] swaps
//! them at the row boundary.
//!
//! [`commit`]: StatusTracker::commit

use std::ops::Range;

use chairplan_grammar::{RoomId, Symbol};

/// What a single column belongs to on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    /// A wall character. Never carries a room.
    Wall,
    /// Outside every room, or a gap still open above.
    Unassigned,
    /// Inside a room whose bottom wall has not been reached yet.
    OpenRoom(RoomId),
}

/// Double-buffered column states for the line sweep.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    previous: Vec<ColumnState>,
    current: Vec<ColumnState>,
}

impl StatusTracker {
    /// Creates a tracker for rows of `width` columns.
    ///
    /// The row "above" the first one is entirely unassigned: nothing is
    /// enclosed before a wall has been drawn.
    pub fn new(width: usize) -> Self {
        Self {
            previous: vec![ColumnState::Unassigned; width],
            current: vec![ColumnState::Unassigned; width],
        }
    }

    /// Resets the current buffer for a new row: walls become `Wall`,
    /// everything else `Unassigned` until the resolver claims it.
    pub fn begin_row(&mut self, symbols: &[Symbol]) {
        self.current.clear();
        self.current.extend(symbols.iter().map(|&s| match s {
            Symbol::Wall => ColumnState::Wall,
            _ => ColumnState::Unassigned,
        }));
    }

    /// States of the row above for the given columns.
    pub fn previous(&self, columns: Range<usize>) -> &[ColumnState] {
        &self.previous[columns]
    }

    /// Marks the given columns of the current row as inside `room`.
    pub fn assign(&mut self, columns: Range<usize>, room: RoomId) {
        self.current[columns].fill(ColumnState::OpenRoom(room));
    }

    /// Columns where a room was open on the row above but nothing
    /// claimed them on the current row, with that room.
    ///
    /// Such a room ran into open space without a closing wall.
    pub fn leaks(&self) -> impl Iterator<Item = (usize, RoomId)> + '_ {
        self.previous
            .iter()
            .zip(&self.current)
            .enumerate()
            .filter_map(|(column, states)| match states {
                (ColumnState::OpenRoom(room), ColumnState::Unassigned) => Some((column, *room)),
                _ => None,
            })
    }

    /// Ends the current row: it becomes the row above for the next one.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
    }

    /// After the last commit: every column still inside an open room,
    /// with that room.
    pub fn lingering(&self) -> impl Iterator<Item = (usize, RoomId)> + '_ {
        self.previous
            .iter()
            .enumerate()
            .filter_map(|(column, state)| match state {
                ColumnState::OpenRoom(room) => Some((column, *room)),
                _ => None,
            })
    }
}
