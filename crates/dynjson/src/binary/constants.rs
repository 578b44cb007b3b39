//! Wire-format constants for the binary value encoding.

/// Null: no payload.
pub const TAG_NULL: u8 = 0x00;
/// Boolean true: no payload.
pub const TAG_TRUE: u8 = b't';
/// Boolean false: no payload.
pub const TAG_FALSE: u8 = b'f';
/// Number: 8 raw bytes of the f64.
pub const TAG_NUMBER: u8 = b'n';
/// String: i32 byte length + raw bytes.
pub const TAG_STR: u8 = b's';
/// Array: i32 element count + that many encoded values.
pub const TAG_ARRAY: u8 = b'a';
/// Object: i32 pair count, then per pair an i32-length-prefixed key and one
/// encoded value.
pub const TAG_OBJECT: u8 = b'o';
