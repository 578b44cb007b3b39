//! Value model error type.

use thiserror::Error;

/// Error type for [`Value`](crate::Value) access and conversion operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A typed accessor or conversion was applied to the wrong variant.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("not an array: {0}")]
    NotAnArray(&'static str),
    #[error("not an object: {0}")]
    NotAnObject(&'static str),
    #[error("invalid index {index} for array of length {len}")]
    InvalidIndex { index: usize, len: usize },
    #[error("no size defined for {0}")]
    NoSizeDefined(&'static str),
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
    #[error("number is not finite")]
    NonFinite,
}
