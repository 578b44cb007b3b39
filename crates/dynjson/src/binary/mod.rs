//! Compact binary value encoding/decoding.
//!
//! The wire format is a self-describing, tag-prefixed depth-first walk of a
//! [`Value`](crate::Value) tree. Multi-byte fields are native byte order:
//! this is a same-process round-trip format, smaller and faster to produce
//! and consume than JSON text, not a portable interchange format.

mod constants;
mod decoder;
mod encoder;
mod error;

pub use decoder::BinaryDecoder;
pub use encoder::BinaryEncoder;
pub use error::BinaryError;
