//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Bridges the dynamic value model to the value type the rest of the Rust
//! ecosystem speaks. The bridge is asymmetric: `serde_json` trees always
//! convert in, while converting out fails for payloads JSON text cannot
//! carry (non-UTF-8 byte strings, non-finite numbers).

use bstr::{BString, ByteSlice};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::{Value, ValueError};

/// Converts a `serde_json::Value` into a [`Value`].
///
/// Numbers are narrowed to `f64`; integers outside the exactly-representable
/// range lose precision.
pub fn from_json(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        JsonValue::String(s) => Value::Str(BString::from(s.as_str())),
        JsonValue::Array(arr) => Value::Array(arr.iter().map(from_json).collect()),
        JsonValue::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (BString::from(k.as_str()), from_json(v)))
                .collect(),
        ),
    }
}

/// Converts a [`Value`] into a `serde_json::Value`.
///
/// Fails with [`ValueError::InvalidUtf8`] if a string payload or object key
/// is not valid UTF-8, and with [`ValueError::NonFinite`] for NaN or
/// infinite numbers.
pub fn to_json(v: &Value) -> Result<JsonValue, ValueError> {
    Ok(match v {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => {
            JsonValue::Number(Number::from_f64(*n).ok_or(ValueError::NonFinite)?)
        }
        Value::Str(s) => JsonValue::String(utf8(s)?.to_owned()),
        Value::Array(arr) => JsonValue::Array(arr.iter().map(to_json).collect::<Result<_, _>>()?),
        Value::Object(map) => {
            let mut out = JsonMap::new();
            for (k, v) in map {
                out.insert(utf8(k)?.to_owned(), to_json(v)?);
            }
            JsonValue::Object(out)
        }
    })
}

fn utf8(bytes: &BString) -> Result<&str, ValueError> {
    bytes.to_str().map_err(|_| ValueError::InvalidUtf8)
}
