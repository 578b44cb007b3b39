//! Compact JSON text encoder.

use dynjson_buffers::Writer;

use crate::value::{Map, Value};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Compact JSON text encoder.
///
/// Produces the most compact form: no whitespace anywhere, object keys in
/// their stored (sorted) order. Output is pure ASCII: any byte outside
/// printable ASCII is emitted as a `\xHH` escape, which makes arbitrary
/// byte-string payloads round-trippable through text.
///
/// Encoding is infallible; every variant of [`Value`] has a rendering.
pub struct JsonEncoder {
    pub writer: Writer,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a [`Value`] tree and returns the JSON text bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    /// Encodes a [`Value`] tree into an owned string.
    pub fn encode_to_string(&mut self, value: &Value) -> String {
        // the escape policy keeps the output ASCII-only
        String::from_utf8_lossy(&self.encode(value)).into_owned()
    }

    /// Appends one value to the writer without resetting it, for emitting a
    /// stream of top-level values.
    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.writer.utf8("null"),
            Value::Bool(true) => self.writer.utf8("true"),
            Value::Bool(false) => self.writer.utf8("false"),
            Value::Number(n) => self.write_number(*n),
            Value::Str(s) => self.write_str(s),
            Value::Array(arr) => self.write_array(arr),
            Value::Object(map) => self.write_object(map),
        }
    }

    /// Writes a number in the shortest decimal form that parses back to the
    /// same bits.
    pub fn write_number(&mut self, n: f64) {
        self.writer.utf8(&n.to_string());
    }

    /// Writes a quoted string literal.
    ///
    /// Backslash, newline, tab, carriage return, backspace, vertical tab,
    /// and double quote get their one-character escape; any other byte
    /// outside printable ASCII is emitted as `\xHH` (lowercase hex);
    /// printable ASCII is emitted verbatim.
    pub fn write_str(&mut self, s: &[u8]) {
        self.writer.u8(b'"');
        for &b in s {
            match b {
                b'\\' => self.writer.utf8("\\\\"),
                b'\n' => self.writer.utf8("\\n"),
                b'\t' => self.writer.utf8("\\t"),
                b'\r' => self.writer.utf8("\\r"),
                0x08 => self.writer.utf8("\\b"),
                0x0b => self.writer.utf8("\\v"),
                b'"' => self.writer.utf8("\\\""),
                0x20..=0x7e => self.writer.u8(b),
                _ => self.writer.buf(&[
                    b'\\',
                    b'x',
                    HEX[(b >> 4) as usize],
                    HEX[(b & 0x0f) as usize],
                ]),
            }
        }
        self.writer.u8(b'"');
    }

    fn write_array(&mut self, arr: &[Value]) {
        self.writer.u8(b'[');
        for (i, v) in arr.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.write_any(v);
        }
        self.writer.u8(b']');
    }

    fn write_object(&mut self, map: &Map) {
        self.writer.u8(b'{');
        for (i, (key, v)) in map.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.write_str(key);
            self.writer.u8(b':');
            self.write_any(v);
        }
        self.writer.u8(b'}');
    }
}
