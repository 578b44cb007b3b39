//! Paired value codecs, one per encoding format.

mod binary;
mod json;
mod registry;
mod types;

pub use binary::BinaryValueCodec;
pub use json::JsonValueCodec;
pub use registry::Codecs;
pub use types::{CodecError, ValueCodec};
