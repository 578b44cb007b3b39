//! Binary codec wrapper.

use crate::binary::{BinaryDecoder, BinaryEncoder};
use crate::constants::EncodingFormat;
use crate::value::Value;

use super::types::{CodecError, ValueCodec};

pub struct BinaryValueCodec {
    pub encoder: BinaryEncoder,
    pub decoder: BinaryDecoder,
}

impl Default for BinaryValueCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryValueCodec {
    pub fn new() -> Self {
        Self {
            encoder: BinaryEncoder::new(),
            decoder: BinaryDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "binary"
    }

    pub fn format(&self) -> EncodingFormat {
        EncodingFormat::Binary
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value))
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl ValueCodec for BinaryValueCodec {
    fn id(&self) -> &'static str {
        self.id()
    }

    fn format(&self) -> EncodingFormat {
        self.format()
    }

    fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.encode(value)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.decode(bytes)
    }
}
