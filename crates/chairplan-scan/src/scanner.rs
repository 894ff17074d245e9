//! The plan scanner: drives the line sweep and the final validation.

use std::collections::{BTreeMap, BTreeSet};

use chairplan_grammar::{Inventory, RoomId};

use crate::content::{apply, extract};
use crate::resolver::resolve_section;
use crate::section::{detect_sections, stray_content};
use crate::status::StatusTracker;
use crate::validate::validate_row;
use crate::{PlanError, RoomRegistry, ScanConfig};

/// One scanning session over one plan.
///
/// Rows are fed top to bottom with [`feed_row`](Self::feed_row); the
/// result is only available from [`finish`](Self::finish), which
/// consumes the scanner. A scanner is never reused, so two scans of the
/// same rows cannot influence each other.
///
/// ```text
/// new() ──→ feed_row() × N ──→ finish() ──→ Inventory
///               │                  │
///               ▼                  ▼
///           PlanError          PlanError
/// ```
#[derive(Debug)]
pub struct PlanScanner {
    config: ScanConfig,

    /// Width fixed by the first row.
    width: Option<usize>,

    /// Rows accepted so far.
    rows: usize,

    status: StatusTracker,
    registry: RoomRegistry,

    /// Unnamed rooms that ran into open space, with the first line and
    /// column where that happened. Settled by [`finish`](Self::finish).
    open_leaks: BTreeMap<RoomId, (usize, usize)>,
}

impl PlanScanner {
    /// Creates a scanner with the given config.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            width: None,
            rows: 0,
            status: StatusTracker::new(0),
            registry: RoomRegistry::new(),
            open_leaks: BTreeMap::new(),
        }
    }

    /// Processes the next row of the plan.
    ///
    /// The row must not include its line terminator.
    ///
    /// # Errors
    /// Any [`PlanError`] detected on this row. After an error the scan is
    /// over; the scanner should be dropped.
    pub fn feed_row(&mut self, text: &str) -> Result<(), PlanError> {
        let line = self.rows + 1;
        let row = validate_row(line, text, self.width, &self.config)?;
        if self.width.is_none() {
            self.width = Some(row.width());
            self.status = StatusTracker::new(row.width());
        }

        self.status.begin_row(row.symbols());
        let sections = detect_sections(row.symbols());
        if let Some(column) = stray_content(row.symbols(), &sections) {
            return Err(PlanError::UnenclosedRoom { line, column });
        }

        for &section in &sections {
            let resolution = resolve_section(
                section,
                &row,
                line,
                &mut self.status,
                &mut self.registry,
            )?;
            let Some(room) = resolution.room() else {
                continue;
            };
            let interior = section.interior();
            let content = extract(
                &row.chars()[interior.clone()],
                &row.symbols()[interior],
            );
            // Resolved ids are canonical, so the record exists.
            if let Some(record) = self.registry.get_mut(room) {
                apply(record, content, line)?;
            }
        }

        // Named rooms fail here. Unnamed ones may be open notches and are
        // settled in `finish`.
        for (column, room) in self.status.leaks() {
            let room = self.registry.find(room);
            let named = self
                .registry
                .get(room)
                .is_some_and(|record| record.name.is_some());
            if named {
                return Err(PlanError::UnenclosedRoom { line, column });
            }
            self.open_leaks.entry(room).or_insert((line, column));
        }
        self.status.commit();
        self.rows = line;

        tracing::trace!(line, sections = sections.len(), "row scanned");
        Ok(())
    }

    /// Number of rows accepted so far.
    pub fn rows_seen(&self) -> usize {
        self.rows
    }

    /// The fixed row width, once the first row has been read.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Runs the final validation and returns the inventory.
    ///
    /// 1. Unnamed regions must hold no furniture; empty ones (yards,
    ///    shafts, courtyards, notches open to the outside) are dropped.
    /// 2. No room that is kept may be open: neither left open by the last
    ///    row nor escaped into open space earlier.
    /// 3. Room names must be unique.
    ///
    /// # Errors
    /// [`PlanError::ChairsOutsideRoom`], [`PlanError::UnenclosedRoom`] or
    /// [`PlanError::DuplicateRoomName`], in that order of precedence.
    pub fn finish(mut self) -> Result<Inventory, PlanError> {
        // (room, line, column) for every place a room was seen open.
        let mut unclosed = Vec::new();
        for (&room, &(line, column)) in &self.open_leaks {
            unclosed.push((self.registry.find(room), line, column));
        }
        for (column, room) in self.status.lingering() {
            unclosed.push((self.registry.find(room), self.rows, column));
        }

        let mut named = Vec::with_capacity(self.registry.len());
        let mut dropped = BTreeSet::new();
        for record in self.registry.into_records() {
            match record.name {
                Some(name) => named.push((name, record.counts)),
                None if record.counts.is_empty() => {
                    tracing::debug!(room_id = %record.id, "anonymous region dropped");
                    dropped.insert(record.id);
                }
                None => {
                    return Err(PlanError::ChairsOutsideRoom {
                        room: record.id,
                        counts: record.counts,
                    });
                }
            }
        }

        let first_open = unclosed
            .into_iter()
            .filter(|(room, ..)| !dropped.contains(room))
            .min_by_key(|&(_, line, column)| (line, column));
        if let Some((room, line, column)) = first_open {
            tracing::debug!(room_id = %room, line, column, "room left open");
            return Err(PlanError::UnenclosedRoom { line, column });
        }

        let mut inventory = Inventory::new();
        for (name, counts) in named {
            if inventory.contains(&name) {
                return Err(PlanError::DuplicateRoomName { name });
            }
            inventory.insert(name, counts);
        }

        tracing::info!(
            rooms = inventory.len(),
            rows = self.rows,
            width = self.width.unwrap_or(0),
            "plan scanned"
        );
        Ok(inventory)
    }
}

impl Default for PlanScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Scans a whole plan with the default config.
///
/// ```rust
/// use chairplan_grammar::ChairCounts;
/// use chairplan_scan::scan_plan;
///
/// let inventory = scan_plan(["+---+", "|k W|", "+---+"]).unwrap();
/// assert_eq!(inventory.get("k"), Some(&ChairCounts::new(1, 0, 0, 0)));
/// ```
///
/// # Errors
/// The first [`PlanError`] found.
pub fn scan_plan<I, S>(rows: I) -> Result<Inventory, PlanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_plan_with(ScanConfig::default(), rows)
}

/// Scans a whole plan with an explicit config.
///
/// # Errors
/// The first [`PlanError`] found.
pub fn scan_plan_with<I, S>(config: ScanConfig, rows: I) -> Result<Inventory, PlanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = PlanScanner::new(config);
    for row in rows {
        scanner.feed_row(row.as_ref())?;
    }
    scanner.finish()
}
