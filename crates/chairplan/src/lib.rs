//! # Chairplan
//!
//! Room and furniture inventory extraction from ASCII floor plans.
//!
//! A plan is drawn with wall characters (`| / \ + -`), room names in
//! lowercase letters, and furniture as single uppercase codes (`W`, `P`,
//! `S`, `C`). Chairplan sweeps the plan row by row, works out which
//! wall-enclosed region every name and chair belongs to, and returns the
//! furniture counts per room.
//!
//! ## Quick Start
//!
//! ```rust
//! use chairplan::prelude::*;
//!
//! let plan = "\
//! +------+
//! | den  |
//! |  W S |
//! +------+";
//!
//! let inventory = ChairDataExtractor::new().extract_from_str(plan)?;
//! assert_eq!(inventory.get("den"), Some(&ChairCounts::new(1, 0, 1, 0)));
//!
//! let report = TextCodec.encode(&inventory)?;
//! assert!(String::from_utf8_lossy(&report).starts_with("total:"));
//! # Ok::<(), ChairplanError>(())
//! ```

mod error;
mod extractor;

pub use error::ChairplanError;
pub use extractor::{ChairDataExtractor, ChairDataExtractorBuilder};

pub use chairplan_grammar as grammar;
pub use chairplan_scan as scan;

/// Everything needed to extract and render an inventory.
pub mod prelude {
    pub use crate::{ChairDataExtractor, ChairDataExtractorBuilder, ChairplanError};
    #[cfg(feature = "json")]
    pub use chairplan_grammar::JsonCodec;
    pub use chairplan_grammar::{ChairCounts, ChairType, Codec, Inventory, TextCodec};
    pub use chairplan_scan::{scan_plan, PlanError, PlanErrorKind, PlanScanner, ScanConfig};
}
