//! JSON text parser error type.

use thiserror::Error;

/// Error type for JSON text parsing.
///
/// Every variant carries the byte offset at which the condition was
/// detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("double quote expected at byte {0}")]
    QuoteExpected(usize),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("']' expected at byte {0}")]
    ArrayNotClosed(usize),
    #[error("':' expected at byte {0}")]
    ColonExpected(usize),
    #[error("'}}' expected at byte {0}")]
    ObjectNotClosed(usize),
    #[error("invalid token at byte {0}")]
    InvalidToken(usize),
    #[error("invalid number literal at byte {0}")]
    InvalidNumber(usize),
}
