//! JSON text codec wrapper.

use crate::constants::EncodingFormat;
use crate::json::{JsonDecoder, JsonEncoder};
use crate::value::Value;

use super::types::{CodecError, ValueCodec};

pub struct JsonValueCodec {
    pub encoder: JsonEncoder,
    pub decoder: JsonDecoder,
}

impl Default for JsonValueCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonValueCodec {
    pub fn new() -> Self {
        Self {
            encoder: JsonEncoder::new(),
            decoder: JsonDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "json"
    }

    pub fn format(&self) -> EncodingFormat {
        EncodingFormat::Json
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value))
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl ValueCodec for JsonValueCodec {
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
