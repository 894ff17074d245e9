//! Codec trait and implementations for rendering an [`Inventory`].
//!
//! The scanner produces an [`Inventory`]; how it reaches a downstream
//! tool is up to the caller. Anything implementing [`Codec`] can be
//! swapped in without touching the scan.
//!
//! - [`TextCodec`]: the human-readable report (`total:` block, then one
//!   block per room in name order).
//! - [`JsonCodec`]: a JSON object of name → `[W, P, S, C]`, behind the
//!   `json` feature (enabled by default).

use crate::{GrammarError, Inventory};

/// Converts an inventory to bytes and, where the format allows, back.
pub trait Codec: Send + Sync + 'static {
    /// Renders the inventory.
    ///
    /// # Errors
    /// Returns [`GrammarError`] if the underlying format fails.
    fn encode(&self, inventory: &Inventory) -> Result<Vec<u8>, GrammarError>;

    /// Parses an inventory previously produced by [`encode`](Self::encode).
    ///
    /// # Errors
    /// Returns [`GrammarError::Decode`] for malformed input, or
    /// [`GrammarError::Unsupported`] for one-way formats.
    fn decode(&self, data: &[u8]) -> Result<Inventory, GrammarError>;
}

// ---------------------------------------------------------------------------
// TextCodec
// ---------------------------------------------------------------------------

/// The plain-text report.
///
/// ```rust
/// use chairplan_grammar::{ChairCounts, Codec, Inventory, TextCodec};
///
/// let mut inv = Inventory::new();
/// inv.insert("kitchen", ChairCounts::new(1, 0, 0, 0));
///
/// let text = String::from_utf8(TextCodec.encode(&inv).unwrap()).unwrap();
/// assert_eq!(
///     text,
///     "total:\nW: 1, P: 0, S: 0, C: 0\nkitchen:\nW: 1, P: 0, S: 0, C: 0\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn encode(&self, inventory: &Inventory) -> Result<Vec<u8>, GrammarError> {
        let mut out = format!("total:\n{}\n", inventory.total());
        for (name, counts) in inventory.iter() {
            out.push_str(&format!("{name}:\n{counts}\n"));
        }
        Ok(out.into_bytes())
    }

    fn decode(&self, _data: &[u8]) -> Result<Inventory, GrammarError> {
        Err(GrammarError::Unsupported("text reports cannot be decoded"))
    }
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode(&self, inventory: &Inventory) -> Result<Vec<u8>, GrammarError> {
        serde_json::to_vec(inventory).map_err(GrammarError::Encode)
    }

    fn decode(&self, data: &[u8]) -> Result<Inventory, GrammarError> {
        serde_json::from_slice(data).map_err(GrammarError::Decode)
    }
}
