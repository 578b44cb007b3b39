//! Binary value encoder.

use dynjson_buffers::Writer;

use crate::value::{Map, Value};

use super::constants::{
    TAG_ARRAY, TAG_FALSE, TAG_NULL, TAG_NUMBER, TAG_OBJECT, TAG_STR, TAG_TRUE,
};

/// Binary value encoder.
///
/// Appends a self-describing tag-prefixed record for a value and all of its
/// descendants, depth-first, into a growable buffer. Object pairs are
/// written in the stored (sorted) key order.
pub struct BinaryEncoder {
    pub writer: Writer,
}

impl Default for BinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a [`Value`] tree and returns the encoded bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    /// Appends one encoded value to the writer without resetting it, for
    /// accumulating a stream of values in one buffer.
    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.writer.u8(TAG_NULL),
            Value::Bool(true) => self.writer.u8(TAG_TRUE),
            Value::Bool(false) => self.writer.u8(TAG_FALSE),
            Value::Number(n) => {
                self.writer.u8(TAG_NUMBER);
                self.writer.f64(*n);
            }
            Value::Str(s) => {
                self.writer.u8(TAG_STR);
                self.write_len_prefixed(s);
            }
            Value::Array(arr) => {
                self.writer.u8(TAG_ARRAY);
                self.writer.i32(arr.len() as i32);
                for v in arr {
                    self.write_any(v);
                }
            }
            Value::Object(map) => self.write_object(map),
        }
    }

    fn write_object(&mut self, map: &Map) {
        self.writer.u8(TAG_OBJECT);
        self.writer.i32(map.len() as i32);
        for (key, v) in map {
            self.write_len_prefixed(key);
            self.write_any(v);
        }
    }

    /// Writes an i32 byte length followed by the raw bytes.
    fn write_len_prefixed(&mut self, data: &[u8]) {
        self.writer.i32(data.len() as i32);
        self.writer.buf(data);
    }
}
