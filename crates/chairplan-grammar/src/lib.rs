//! Plan grammar for Chairplan.
//!
//! This crate defines the "alphabet" a floor plan is drawn with and the
//! data a finished scan produces:
//!
//! - **Symbols** ([`Symbol`], [`classify`]): which characters are walls,
//!   blanks, room-name text, name delimiters, or furniture codes.
//! - **Types** ([`ChairType`], [`ChairCounts`], [`RoomId`], [`Inventory`]):
//!   per-room furniture tallies keyed by room name.
//! - **Codec** ([`Codec`] trait, [`TextCodec`], [`JsonCodec`]): how an
//!   inventory is rendered to bytes for downstream tools.
//! - **Errors** ([`GrammarError`]): what can go wrong while encoding or
//!   decoding a report.
//!
//! # Architecture
//!
//! The grammar layer knows nothing about the line sweep. It is shared by
//! the scanner (which classifies characters and fills an [`Inventory`])
//! and by whatever renders the result.
//!
//! ```text
//! rows (text) → Scan (line sweep) → Inventory → Codec (bytes)
//! ```

mod codec;
mod error;
mod symbol;
mod types;

pub use codec::{Codec, TextCodec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::GrammarError;
pub use symbol::{
    classify, is_wall, Symbol, HORIZONTAL_WALL_SYMBOLS, NAME_DELIMITERS,
    VERTICAL_WALL_SYMBOLS,
};
pub use types::{ChairCounts, ChairType, Inventory, RoomId};
