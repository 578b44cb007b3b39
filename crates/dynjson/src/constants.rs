//! Top-level constants for dynjson.

/// Encoding format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFormat {
    Json = 0,
    Binary = 1,
}
