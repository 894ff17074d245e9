//! Error types for the scan layer.
//!
//! Every variant is fatal: the first violation aborts the scan and no
//! partial inventory is produced. Line numbers are 1-based.

use std::fmt;

use chairplan_grammar::{ChairCounts, RoomId};

/// Errors that can occur while scanning a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A row contains a character outside the plan alphabet.
    #[error("invalid character {found:?} at line {line}, column {column}:\n{text}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
        text: String,
    },

    /// A row's width differs from the first row's (or exceeds the
    /// configured maximum).
    #[error("line {line} has width {actual}, expected {expected}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Content or a partial boundary appears without full wall
    /// enclosure, or a region is never closed.
    #[error("room not fully enclosed by walls at line {line}, column {column}")]
    UnenclosedRoom { line: usize, column: usize },

    /// Two different names were attributed to one room.
    #[error("multiple names for the same room at line {line}: {first:?} and {second:?}")]
    ConflictingRoomNames {
        line: usize,
        first: String,
        second: String,
    },

    /// Furniture was found in a region that never got a name.
    #[error("chairs outside any room: region {room} holds {counts}")]
    ChairsOutsideRoom { room: RoomId, counts: ChairCounts },

    /// Two distinct rooms share a name.
    #[error("different rooms share the name {name:?}")]
    DuplicateRoomName { name: String },
}

impl PlanError {
    /// The classification of this error, without its context.
    pub fn kind(&self) -> PlanErrorKind {
        match self {
            Self::InvalidCharacter { .. } => PlanErrorKind::InvalidCharacter,
            Self::RowWidthMismatch { .. } => PlanErrorKind::RowWidthMismatch,
            Self::UnenclosedRoom { .. } => PlanErrorKind::UnenclosedRoom,
            Self::ConflictingRoomNames { .. } => PlanErrorKind::ConflictingRoomNames,
            Self::ChairsOutsideRoom { .. } => PlanErrorKind::ChairsOutsideRoom,
            Self::DuplicateRoomName { .. } => PlanErrorKind::DuplicateRoomName,
        }
    }
}

/// Fieldless mirror of [`PlanError`]'s variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanErrorKind {
    InvalidCharacter,
    RowWidthMismatch,
    UnenclosedRoom,
    ConflictingRoomNames,
    ChairsOutsideRoom,
    DuplicateRoomName,
}

impl fmt::Display for PlanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter => write!(f, "InvalidCharacter"),
            Self::RowWidthMismatch => write!(f, "RowWidthMismatch"),
            Self::UnenclosedRoom => write!(f, "UnenclosedRoom"),
            Self::ConflictingRoomNames => write!(f, "ConflictingRoomNames"),
            Self::ChairsOutsideRoom => write!(f, "ChairsOutsideRoom"),
            Self::DuplicateRoomName => write!(f, "DuplicateRoomName"),
        }
    }
}
