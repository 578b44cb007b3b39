//! Binary value decoder.

use bstr::BString;
use dynjson_buffers::Reader;

use crate::value::{Map, Value};

use super::constants::{
    TAG_ARRAY, TAG_FALSE, TAG_NULL, TAG_NUMBER, TAG_OBJECT, TAG_STR, TAG_TRUE,
};
use super::error::BinaryError;

/// Binary value decoder.
///
/// [`read`](BinaryDecoder::read) consumes exactly the bytes of one encoded
/// value and advances the reader past them, so repeated calls on the same
/// reader decode a stream of concatenated values.
pub struct BinaryDecoder;

impl Default for BinaryDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one value from the start of `data`.
    pub fn decode(&mut self, data: &[u8]) -> Result<Value, BinaryError> {
        let mut reader = Reader::new(data);
        self.read(&mut reader)
    }

    /// Reads one encoded value, advancing the cursor past it.
    pub fn read(&mut self, reader: &mut Reader<'_>) -> Result<Value, BinaryError> {
        let offset = reader.x;
        let tag = reader.u8()?;
        match tag {
            TAG_NULL => Ok(Value::Null),
            TAG_TRUE => Ok(Value::Bool(true)),
            TAG_FALSE => Ok(Value::Bool(false)),
            TAG_NUMBER => Ok(Value::Number(reader.f64()?)),
            TAG_STR => Ok(Value::Str(read_bytes(reader)?)),
            TAG_ARRAY => {
                let len = read_len(reader)?;
                let mut arr = Vec::new();
                for _ in 0..len {
                    arr.push(self.read(reader)?);
                }
                Ok(Value::Array(arr))
            }
            TAG_OBJECT => {
                let pairs = read_len(reader)?;
                let mut map = Map::new();
                for _ in 0..pairs {
                    let key = read_bytes(reader)?;
                    let value = self.read(reader)?;
                    // insertion re-establishes the sorted-key invariant, so
                    // an out-of-order or duplicated stream still yields a
                    // well-formed object (last duplicate wins)
                    map.insert(key, value);
                }
                Ok(Value::Object(map))
            }
            _ => Err(BinaryError::CorruptBinary { tag, offset }),
        }
    }
}

fn read_len(reader: &mut Reader<'_>) -> Result<usize, BinaryError> {
    let len = reader.i32()?;
    usize::try_from(len).map_err(|_| BinaryError::InvalidLength(len))
}

fn read_bytes(reader: &mut Reader<'_>) -> Result<BString, BinaryError> {
    let len = read_len(reader)?;
    Ok(BString::from(reader.buf(len)?))
}
