//! Region resolution: which room does a section belong to?
//!
//! The resolver looks at the row above for the section's interior
//! columns and decides:
//!
//! | Above (ignoring walls)      | Interior now | Outcome              |
//! |-----------------------------|--------------|----------------------|
//! | all walls                   | anything     | new room             |
//! | some unassigned, no rooms   | blank        | gap, stays unassigned|
//! | some unassigned, no rooms   | content      | `UnenclosedRoom`     |
//! | unassigned and rooms        | anything     | `UnenclosedRoom`     |
//! | one room                    | anything     | continue that room   |
//! | several rooms               | anything     | merge into smallest  |
//!
//! The geometry that needs a merge looks like this, at line 4:
//!
//! ```text
//! 1    +-----------------------+
//! 2    |           |           |
//! 3    |           +           |
//! 4    |                       |
//! 5    +-----------------------+
//! ```

use std::collections::BTreeSet;

use chairplan_grammar::RoomId;

use crate::content::combine;
use crate::section::RoomSection;
use crate::status::{ColumnState, StatusTracker};
use crate::validate::Row;
use crate::{PlanError, RoomRegistry};

/// How a section was mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not inside any room (yet), or no interior at all.
    Gap,
    /// A fresh room whose top wall is the row above.
    Created(RoomId),
    /// Continues the one room open above.
    Continued(RoomId),
    /// Joined several rooms; `into` survives.
    Merged { into: RoomId, absorbed: Vec<RoomId> },
}

impl Resolution {
    /// The room the section now belongs to, if any.
    pub fn room(&self) -> Option<RoomId> {
        match self {
            Self::Gap => None,
            Self::Created(id) | Self::Continued(id) => Some(*id),
            Self::Merged { into, .. } => Some(*into),
        }
    }
}

/// Maps one section to a room and records it in the current status row.
///
/// # Errors
/// - [`PlanError::UnenclosedRoom`] for content under an open gap or a
///   boundary that is partly open
/// - [`PlanError::ConflictingRoomNames`] if a merge joins two names
pub fn resolve_section(
    section: RoomSection,
    row: &Row,
    line: usize,
    status: &mut StatusTracker,
    registry: &mut RoomRegistry,
) -> Result<Resolution, PlanError> {
    let interior = section.interior();
    if interior.is_empty() {
        return Ok(Resolution::Gap);
    }

    let mut rooms = BTreeSet::new();
    let mut open_above = false;
    for state in status.previous(interior.clone()) {
        match *state {
            ColumnState::Wall => {}
            ColumnState::Unassigned => open_above = true,
            ColumnState::OpenRoom(id) => {
                rooms.insert(registry.find(id));
            }
        }
    }

    let unenclosed = PlanError::UnenclosedRoom {
        line,
        column: interior.start,
    };
    let resolution = match (open_above, rooms.len()) {
        (true, 0) => {
            let has_content = row.symbols()[interior.clone()]
                .iter()
                .any(|s| s.is_content());
            if has_content {
                return Err(unenclosed);
            }
            Resolution::Gap
        }
        (true, _) => return Err(unenclosed),
        (false, 0) => Resolution::Created(registry.create()),
        (false, 1) => match rooms.first() {
            Some(&id) => Resolution::Continued(id),
            None => Resolution::Gap,
        },
        (false, _) => {
            let into = registry.merge(&rooms, |survivor, absorbed| {
                combine(survivor, absorbed, line)
            })?;
            let absorbed = rooms.into_iter().filter(|&id| id != into).collect();
            Resolution::Merged { into, absorbed }
        }
    };

    if let Some(room) = resolution.room() {
        status.assign(interior, room);
    }
    Ok(resolution)
}
