//! Binary codec error type.

use dynjson_buffers::BufferError;
use thiserror::Error;

/// Error type for binary decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// The decoder hit a tag byte that is not part of the wire format. The
    /// stream is unrecoverable; no resynchronization is attempted.
    #[error("unrecognized tag byte 0x{tag:02x} at byte {offset}")]
    CorruptBinary { tag: u8, offset: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid length prefix {0}")]
    InvalidLength(i32),
}

impl From<BufferError> for BinaryError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => BinaryError::UnexpectedEof,
        }
    }
}
