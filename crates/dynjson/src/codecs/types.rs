//! Common codec trait and error.

use crate::binary::BinaryError;
use crate::constants::EncodingFormat;
use crate::json::JsonError;
use crate::value::Value;

/// Aggregate error for operations routed through a [`ValueCodec`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] JsonError),
    #[error("binary codec error: {0}")]
    Binary(#[from] BinaryError),
}

/// Trait for paired encoder/decoder surfaces over [`Value`].
pub trait ValueCodec {
    fn id(&self) -> &'static str;
    fn format(&self) -> EncodingFormat;
    fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError>;
    fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError>;
}
