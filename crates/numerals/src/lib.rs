//! Roman numeral encoding and decoding.
//!
//! Integers in `1..=3999` are encoded by greedy substitution over a fixed
//! descending rule table. Decoding scans a run of numeral letters, computes a
//! relaxed value for it and then re-encodes that value: the input is accepted
//! only if the canonical numeral matches it letter for letter, ignoring case.
//! The decoder therefore accepts exactly the strings the encoder produces.
//!
//! # Example
//!
//! ```
//! use roman_numerals::{parse_roman, to_roman, Roman};
//!
//! assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
//! assert_eq!(parse_roman("mcmxciv").unwrap(), 1994);
//! assert!(parse_roman("IIII").is_err());
//!
//! let year: Roman = "MMXXIV".parse().unwrap();
//! assert_eq!(year.value(), 2024);
//! ```

mod constants;
mod from_roman;
mod roman;
mod to_roman;

pub use constants::{NumeralRule, MAX_NUMERAL_LEN, MAX_ROMAN_SIZE, MAX_VALUE, MIN_VALUE, NUMERALS};
pub use from_roman::{from_roman, numeral_value, parse_roman, relaxed_value};
pub use roman::Roman;
pub use to_roman::{to_roman, to_roman_into};

pub use roman_buffers::{is_roman_digit, Reader, Writer};

use roman_buffers::BufferError;
use thiserror::Error;

/// Error type for Roman numeral operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RomanError {
    /// The integer is outside `1..=3999`.
    #[error("number out of range (must be 1..3999): {0}")]
    OutOfRange(i32),
    /// The output buffer cannot hold the numeral and its terminator slot.
    #[error("output buffer too small (capacity {capacity})")]
    BufferTooSmall { capacity: usize },
    /// No numeral letters at the cursor.
    #[error("empty roman numeral")]
    EmptyNumeral,
    /// The scanned run is longer than any canonical numeral.
    #[error("roman numeral too long ({length} letters)")]
    NumeralTooLong { length: usize },
    /// The scanned run is not a canonical numeral.
    #[error("invalid roman numeral")]
    InvalidNumeral,
    /// Text follows the numeral.
    #[error("unexpected character after roman numeral at offset {offset}")]
    TrailingInput { offset: usize },
}

impl From<BufferError> for RomanError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Overflow { capacity } => RomanError::BufferTooSmall { capacity },
        }
    }
}
