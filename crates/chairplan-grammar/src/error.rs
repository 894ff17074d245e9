//! Error types for the grammar layer.
//!
//! Scanning failures live in `chairplan-scan`; this enum only covers
//! turning a finished inventory into bytes and back.

/// Errors that can occur while encoding or decoding an inventory report.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// Serializing the inventory failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The bytes are not a valid JSON inventory.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The codec cannot perform this operation.
    ///
    /// The text report is one-way: it drops nothing, but it is meant for
    /// people, so [`TextCodec`](crate::TextCodec) does not parse it back.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
