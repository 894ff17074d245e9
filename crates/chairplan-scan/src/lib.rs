//! Line-sweep room extraction for Chairplan.
//!
//! A plan is read one row at a time. For every row the scanner finds the
//! wall-delimited sections, decides for each one whether it continues a
//! room from the row above, starts a new one, or joins several rooms that
//! turn out to be the same, and tallies names and furniture into a room
//! registry. After the last row a final validation produces the
//! [`Inventory`](chairplan_grammar::Inventory).
//!
//! # Key types
//!
//! - [`PlanScanner`]: one scanning session (`feed_row` … `finish`)
//! - [`scan_plan`] / [`scan_plan_with`]: scan a whole row sequence
//! - [`RoomRegistry`]: room records with union-find merging
//! - [`StatusTracker`] / [`ColumnState`]: per-column state between rows
//! - [`ScanConfig`]: strictness knobs
//! - [`PlanError`]: the failure taxonomy

mod config;
mod content;
mod error;
mod registry;
mod resolver;
mod scanner;
mod section;
mod status;
mod validate;

pub use config::ScanConfig;
pub use content::{apply, combine, extract, SectionContent};
pub use error::{PlanError, PlanErrorKind};
pub use registry::{RoomRecord, RoomRegistry};
pub use resolver::{resolve_section, Resolution};
pub use scanner::{scan_plan, scan_plan_with, PlanScanner};
pub use section::{detect_sections, stray_content, RoomSection};
pub use status::{ColumnState, StatusTracker};
pub use validate::{validate_row, Row};
