//! Error types for parsing, writing, and value access.

use crate::lexer::TokenKind;
use thiserror::Error;

/// Errors that can occur while tokenizing, parsing, or reading values.
///
/// Every error is terminal for the operation that raised it: there is no
/// retry or partial-result recovery. Lexical and structural errors carry the
/// byte offset in the source buffer where they were detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The tokenizer saw a byte that cannot start any valid token.
    #[error("unexpected byte 0x{found:02x} at offset {offset}")]
    UnexpectedByte { offset: usize, found: u8 },

    /// The parser saw a structurally invalid token given the current
    /// grammar position. `expected` lists every token kind that would have
    /// been valid at this point.
    #[error("unexpected {found} at offset {offset}, expected one of {expected:?}")]
    UnexpectedToken {
        offset: usize,
        expected: &'static [TokenKind],
        found: TokenKind,
    },

    /// The buffer ended mid-token or mid-structure.
    #[error("input ended unexpectedly")]
    DataTruncated,

    /// A token's bytes could not be interpreted as valid content, e.g.
    /// invalid UTF-8 or a malformed escape sequence inside a string span.
    #[error("corrupted data at offset {offset}: {reason}")]
    DataCorrupted { offset: usize, reason: String },

    /// The document nests deeper than [`MAX_NESTING_DEPTH`].
    ///
    /// [`MAX_NESTING_DEPTH`]: crate::decoder::MAX_NESTING_DEPTH
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// A typed accessor was called on the wrong value variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An integer accessor was called on a number whose digit string does
    /// not fit the requested type.
    #[error("number {digits:?} is out of range for {target}")]
    NumberOutOfRange {
        digits: String,
        target: &'static str,
    },

    /// A keyed or indexed lookup found nothing.
    #[error("no value for the requested key or index")]
    MissingValue,
}

/// Convenience alias used throughout verbatim-json.
pub type Result<T> = std::result::Result<T, JsonError>;
