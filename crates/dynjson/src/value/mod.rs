//! The dynamic [`Value`] model.
//!
//! A [`Value`] is a tagged variant holding one of six payloads: null,
//! boolean, number, string, array, or object. Strings are byte strings
//! ([`BString`]) and are not required to be valid UTF-8; objects keep their
//! keys in sorted (byte-lexicographic) order, which is authoritative for
//! serialization.
//!
//! Values are built incrementally through the auto-vivifying accessors
//! [`at`](Value::at) and [`key`](Value::key):
//!
//! ```
//! use dynjson::Value;
//!
//! let mut v = Value::default();
//! *v.key("x")?.at(2)?.key("y")? = Value::from("Test");
//! assert!(v.key("x")?.at(2)?.key("y")?.is_str());
//! # Ok::<(), dynjson::ValueError>(())
//! ```

mod convert;
mod error;

pub use convert::{from_json, to_json};
pub use error::ValueError;

use std::collections::BTreeMap;
use std::fmt;

use bstr::{BStr, BString};

/// Object payload: byte-string keys kept in sorted order.
pub type Map = BTreeMap<BString, Value>;
/// Array payload.
pub type Array = Vec<Value>;

/// A dynamically-typed JSON value.
///
/// Exactly one variant is active at a time; assigning a new variant drops
/// the previous payload. A `Value` owns its payload outright, so the whole
/// structure is a strict tree and [`Clone`] deep-copies it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(BString),
    Array(Array),
    Object(Map),
}

impl Value {
    /// Constructs an empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// Constructs an array of `len` null elements.
    pub fn array(len: usize) -> Self {
        Value::Array(vec![Value::Null; len])
    }

    /// Name of the active variant, used in error payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    /// Returns the number payload.
    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(mismatch("number", other)),
        }
    }

    /// Returns the string payload as a borrowed byte string.
    pub fn as_str(&self) -> Result<&BStr, ValueError> {
        match self {
            Value::Str(s) => Ok(s.as_ref()),
            other => Err(mismatch("string", other)),
        }
    }

    /// Returns the array payload as a borrowed slice.
    pub fn as_array(&self) -> Result<&[Value], ValueError> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(mismatch("array", other)),
        }
    }

    /// Returns the array payload mutably.
    pub fn as_array_mut(&mut self) -> Result<&mut Array, ValueError> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(mismatch("array", other)),
        }
    }

    /// Returns the object payload as a borrowed map.
    pub fn as_map(&self) -> Result<&Map, ValueError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(mismatch("object", other)),
        }
    }

    /// Returns the object payload mutably.
    pub fn as_map_mut(&mut self) -> Result<&mut Map, ValueError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(mismatch("object", other)),
        }
    }

    /// Returns the byte length of a string or the element count of an array.
    ///
    /// Size is defined for no other variant.
    pub fn size(&self) -> Result<usize, ValueError> {
        match self {
            Value::Str(s) => Ok(s.len()),
            Value::Array(arr) => Ok(arr.len()),
            other => Err(ValueError::NoSizeDefined(other.type_name())),
        }
    }

    /// Read-only indexed access.
    ///
    /// Fails with [`ValueError::NotAnArray`] unless the value is an array,
    /// and with [`ValueError::InvalidIndex`] when `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Value, ValueError> {
        match self {
            Value::Array(arr) => arr.get(index).ok_or(ValueError::InvalidIndex {
                index,
                len: arr.len(),
            }),
            other => Err(ValueError::NotAnArray(other.type_name())),
        }
    }

    /// Vivifying indexed access.
    ///
    /// A null value becomes an empty array first; the array then grows with
    /// nulls through `index` so the returned slot always exists. Fails with
    /// [`ValueError::NotAnArray`] for any other active variant.
    pub fn at(&mut self, index: usize) -> Result<&mut Value, ValueError> {
        if self.is_null() {
            *self = Value::Array(Array::new());
        }
        match self {
            Value::Array(arr) => {
                if index >= arr.len() {
                    arr.resize(index + 1, Value::Null);
                }
                Ok(&mut arr[index])
            }
            other => Err(ValueError::NotAnArray(other.type_name())),
        }
    }

    /// Vivifying keyed access (get-or-insert).
    ///
    /// A null value becomes an empty object first; a missing key auto-creates
    /// a null entry, so deep paths compose without pre-declaring intermediate
    /// structure. Fails with [`ValueError::NotAnObject`] for any other active
    /// variant.
    pub fn key<K: Into<BString>>(&mut self, key: K) -> Result<&mut Value, ValueError> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(map) => Ok(map.entry(key.into()).or_insert(Value::Null)),
            other => Err(ValueError::NotAnObject(other.type_name())),
        }
    }

    /// Converts out to any [`FromValue`] type, consuming the value.
    ///
    /// Container conversions apply recursively and fail if any element or
    /// entry fails.
    ///
    /// ```
    /// use dynjson::Value;
    ///
    /// let v = Value::from(vec![vec![1, 2], vec![3]]);
    /// let native: Vec<Vec<i32>> = v.convert()?;
    /// assert_eq!(native, vec![vec![1, 2], vec![3]]);
    /// # Ok::<(), dynjson::ValueError>(())
    /// ```
    pub fn convert<T: FromValue>(self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        actual: actual.type_name(),
    }
}

/// Renders the value as compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::json::JsonEncoder::new().encode_to_string(self))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(BString::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(BString::from(v))
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Value::Str(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Str(BString::from(v))
    }
}

/// Sequence assignment: each element is converted recursively.
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

/// Mapping assignment: each value is converted recursively.
impl<T: Into<Value>> From<BTreeMap<BString, T>> for Value {
    fn from(v: BTreeMap<BString, T>) -> Self {
        Value::Object(v.into_iter().map(|(k, val)| (k, val.into())).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Object(
            v.into_iter()
                .map(|(k, val)| (BString::from(k), val.into()))
                .collect(),
        )
    }
}

/// Conversion out of a [`Value`], applied recursively by the container
/// impls.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(mismatch("number", &other)),
        }
    }
}

/// Truncating, like a `double` to `int` cast.
impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Number(n) => Ok(n as i64),
            other => Err(mismatch("number", &other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Number(n) => Ok(n as i32),
            other => Err(mismatch("number", &other)),
        }
    }
}

impl FromValue for BString {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

/// Fails with [`ValueError::InvalidUtf8`] when the byte payload is not
/// valid UTF-8; use [`BString`] for a lossless conversion.
impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(s) => {
                String::from_utf8(s.into()).map_err(|_| ValueError::InvalidUtf8)
            }
            other => Err(mismatch("string", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Array(arr) => arr.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("array", &other)),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<BString, T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_value(v)?)))
                .collect(),
            other => Err(mismatch("object", &other)),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| {
                    let key = String::from_utf8(k.into()).map_err(|_| ValueError::InvalidUtf8)?;
                    Ok((key, T::from_value(v)?))
                })
                .collect(),
            other => Err(mismatch("object", &other)),
        }
    }
}
