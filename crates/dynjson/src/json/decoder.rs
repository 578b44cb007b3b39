//! Recursive-descent JSON text decoder.

use bstr::BString;
use dynjson_buffers::Reader;

use crate::value::{Map, Value};

use super::error::JsonError;

/// Recursive-descent JSON text decoder.
///
/// [`read`](JsonDecoder::read) consumes exactly one value (plus its leading
/// whitespace) from a [`Reader`] and leaves the cursor after it, so repeated
/// calls on the same reader parse a sequence of whitespace-separated
/// top-level values.
pub struct JsonDecoder;

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one value from the start of `data`.
    ///
    /// Bytes after the first value are left unread; use
    /// [`read`](Self::read) with a caller-owned [`Reader`] to consume a
    /// sequence of values.
    pub fn decode(&mut self, data: &[u8]) -> Result<Value, JsonError> {
        let mut reader = Reader::new(data);
        self.read(&mut reader)
    }

    /// Reads one value from the reader, advancing the cursor past it.
    pub fn read(&mut self, reader: &mut Reader<'_>) -> Result<Value, JsonError> {
        skip_whitespace(reader);
        match reader.peek() {
            Some(b'"') => Ok(Value::Str(read_string(reader)?)),
            Some(b'[') => self.read_array(reader),
            Some(b'{') => self.read_object(reader),
            Some(b) if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.') => {
                read_number(reader)
            }
            Some(_) => read_literal(reader),
            None => Err(JsonError::InvalidToken(reader.x)),
        }
    }

    fn read_array(&mut self, reader: &mut Reader<'_>) -> Result<Value, JsonError> {
        reader.skip(1);
        let mut arr = Vec::new();
        loop {
            skip_whitespace(reader);
            match reader.peek() {
                Some(b']') => {
                    reader.skip(1);
                    return Ok(Value::Array(arr));
                }
                Some(_) => {
                    arr.push(self.read(reader)?);
                    skip_whitespace(reader);
                    // the comma is an optional, whitespace-equivalent
                    // separator
                    if reader.peek() == Some(b',') {
                        reader.skip(1);
                    }
                }
                None => return Err(JsonError::ArrayNotClosed(reader.x)),
            }
        }
    }

    fn read_object(&mut self, reader: &mut Reader<'_>) -> Result<Value, JsonError> {
        reader.skip(1);
        let mut map = Map::new();
        loop {
            skip_whitespace(reader);
            match reader.peek() {
                Some(b'}') => {
                    reader.skip(1);
                    return Ok(Value::Object(map));
                }
                Some(_) => {
                    let key = read_string(reader)?;
                    skip_whitespace(reader);
                    if reader.peek() != Some(b':') {
                        return Err(JsonError::ColonExpected(reader.x));
                    }
                    reader.skip(1);
                    // duplicate keys: last occurrence wins
                    let value = self.read(reader)?;
                    map.insert(key, value);
                    skip_whitespace(reader);
                    if reader.peek() == Some(b',') {
                        reader.skip(1);
                    }
                }
                None => return Err(JsonError::ObjectNotClosed(reader.x)),
            }
        }
    }
}

/// The ASCII whitespace set of C `isspace`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn skip_whitespace(reader: &mut Reader<'_>) {
    while reader.peek().is_some_and(is_space) {
        reader.skip(1);
    }
}

fn read_literal(reader: &mut Reader<'_>) -> Result<Value, JsonError> {
    let rest = &reader.uint8[reader.x..];
    for (text, value) in [
        (&b"null"[..], Value::Null),
        (&b"true"[..], Value::Bool(true)),
        (&b"false"[..], Value::Bool(false)),
    ] {
        if rest.starts_with(text) {
            reader.skip(text.len());
            return Ok(value);
        }
    }
    Err(JsonError::InvalidToken(reader.x))
}

/// Reads a number literal: the maximal run of float-literal bytes, parsed
/// strictly. Text the float grammar rejects is a hard error rather than a
/// silent zero.
fn read_number(reader: &mut Reader<'_>) -> Result<Value, JsonError> {
    let start = reader.x;
    while reader
        .peek()
        .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        reader.skip(1);
    }
    let text = std::str::from_utf8(&reader.uint8[start..reader.x])
        .map_err(|_| JsonError::InvalidNumber(start))?;
    match text.parse::<f64>() {
        Ok(n) => Ok(Value::Number(n)),
        Err(_) => Err(JsonError::InvalidNumber(start)),
    }
}

/// Reads a quoted string literal; shared by value parsing and object-key
/// parsing.
fn read_string(reader: &mut Reader<'_>) -> Result<BString, JsonError> {
    skip_whitespace(reader);
    if reader.peek() != Some(b'"') {
        return Err(JsonError::QuoteExpected(reader.x));
    }
    reader.skip(1);
    let mut result = Vec::new();
    loop {
        match reader.peek() {
            None => return Err(JsonError::QuoteExpected(reader.x)),
            Some(b'"') => {
                reader.skip(1);
                return Ok(BString::from(result));
            }
            Some(b'\\') => {
                reader.skip(1);
                let escape_at = reader.x;
                match reader.peek() {
                    Some(b'\\') => {
                        result.push(b'\\');
                        reader.skip(1);
                    }
                    Some(b'n') => {
                        result.push(b'\n');
                        reader.skip(1);
                    }
                    Some(b'r') => {
                        result.push(b'\r');
                        reader.skip(1);
                    }
                    Some(b't') => {
                        result.push(b'\t');
                        reader.skip(1);
                    }
                    Some(b'b') => {
                        result.push(0x08);
                        reader.skip(1);
                    }
                    Some(b'v') => {
                        result.push(0x0b);
                        reader.skip(1);
                    }
                    Some(b'"') => {
                        result.push(b'"');
                        reader.skip(1);
                    }
                    Some(b'x') => {
                        reader.skip(1);
                        let hi = read_hex_digit(reader)?;
                        let lo = read_hex_digit(reader)?;
                        result.push(hi << 4 | lo);
                    }
                    _ => return Err(JsonError::InvalidEscape(escape_at)),
                }
            }
            Some(b) => {
                result.push(b);
                reader.skip(1);
            }
        }
    }
}

fn read_hex_digit(reader: &mut Reader<'_>) -> Result<u8, JsonError> {
    let at = reader.x;
    match reader.peek() {
        Some(b @ b'0'..=b'9') => {
            reader.skip(1);
            Ok(b - b'0')
        }
        Some(b @ b'a'..=b'f') => {
            reader.skip(1);
            Ok(b - b'a' + 10)
        }
        Some(b @ b'A'..=b'F') => {
            reader.skip(1);
            Ok(b - b'A' + 10)
        }
        _ => Err(JsonError::InvalidEscape(at)),
    }
}
