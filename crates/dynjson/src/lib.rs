//! Dynamically-typed JSON value model with text and binary codecs.
//!
//! `dynjson` gives statically-typed Rust an ergonomic, JSON-like dynamic
//! [`Value`] that can be built incrementally through deep auto-vivifying
//! paths, converted to and from native collection types, round-tripped
//! through JSON text, and persisted through a compact binary form.
//!
//! ```
//! use dynjson::{JsonEncoder, Value};
//!
//! let mut v = Value::default();
//! *v.key("b")? = Value::from(3.141592654);
//! *v.key("a")? = Value::from(false);
//!
//! // keys serialize in sorted order, with no whitespace anywhere
//! let mut encoder = JsonEncoder::new();
//! assert_eq!(
//!     encoder.encode_to_string(&v),
//!     r#"{"a":false,"b":3.141592654}"#
//! );
//! # Ok::<(), dynjson::ValueError>(())
//! ```

mod constants;
mod value;

pub mod binary;
pub mod codecs;
pub mod json;

pub use constants::EncodingFormat;
pub use value::{from_json, to_json, Array, FromValue, Map, Value, ValueError};

pub use binary::{BinaryDecoder, BinaryEncoder, BinaryError};
pub use codecs::{BinaryValueCodec, CodecError, Codecs, JsonValueCodec, ValueCodec};
pub use json::{JsonDecoder, JsonEncoder, JsonError};
