//! Binary buffer utilities for dynjson.
//!
//! This crate provides the cursor and buffer substrate shared by the JSON
//! text transducers and the binary value codec:
//!
//! - [`Reader`] - Reads data from a byte slice with cursor tracking
//! - [`Writer`] - Writes data into an auto-growing buffer
//!
//! Multi-byte reads and writes use native byte order. The binary value
//! format built on top of this crate is a same-process round-trip format,
//! not a portable interchange format.
//!
//! # Example
//!
//! ```
//! use dynjson_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.i32(515);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.i32(), Ok(515));
//! assert_eq!(reader.buf(5), Ok(&b"hello"[..]));
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
        }
    }
}

impl std::error::Error for BufferError {}
