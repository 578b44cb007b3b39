//! JSON text encoding/decoding.
//!
//! The text form is standard JSON with two deviations, both in the string
//! literal rule: a non-standard `\xHH` escape carries one raw byte (so
//! arbitrary byte-string payloads survive a text round-trip), and `\uXXXX`
//! escapes are not supported.

mod decoder;
mod encoder;
mod error;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::JsonError;
