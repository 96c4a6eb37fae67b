use roman_numerals::RomanError;
use thiserror::Error;

/// Error type for literal parsing and formatting.
///
/// Offsets are byte positions in the text handed to the parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("expected roman literal prefix 0r at offset {offset}")]
    MissingPrefix { offset: usize },
    #[error("invalid underscore in roman literal at offset {offset}")]
    InvalidUnderscore { offset: usize },
    #[error("invalid digit {found:?} in roman literal at offset {offset}")]
    InvalidDigit { offset: usize, found: char },
    #[error("invalid roman literal at offset {offset}: {source}")]
    Numeral {
        offset: usize,
        #[source]
        source: RomanError,
    },
    #[error("unexpected character after roman literal at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("number out of range for roman literal (magnitude must be 1..3999): {0}")]
    OutOfRange(i32),
}

impl LiteralError {
    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LiteralError::MissingPrefix { offset }
            | LiteralError::InvalidUnderscore { offset }
            | LiteralError::InvalidDigit { offset, .. }
            | LiteralError::Numeral { offset, .. }
            | LiteralError::TrailingInput { offset } => Some(*offset),
            LiteralError::OutOfRange(_) => None,
        }
    }
}
