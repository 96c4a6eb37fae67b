//! Roman numeral codec, `0r` literals, and the `roman` converter.
//!
//! This crate re-exports the library crates of the workspace:
//!
//! - [`roman_numerals`] - encoder, decoder, and the [`Roman`] value type
//! - [`roman_literal`] - `0r`-prefixed literal parsing and formatting
//! - [`roman_buffers`] - the text cursor and bounded writer they share
//!
//! The [`cli`] and [`commands`] modules implement the `roman` binary.

pub mod cli;
pub mod commands;
pub mod exit_codes;

pub use roman_buffers::{cmp_ascii_ignore_case, is_roman_digit, BufferError, Reader, Writer};
pub use roman_literal::{format_literal, parse_literal, scan_literal, LiteralError};
pub use roman_numerals::{
    from_roman, numeral_value, parse_roman, relaxed_value, to_roman, to_roman_into, NumeralRule,
    Roman, RomanError, MAX_NUMERAL_LEN, MAX_ROMAN_SIZE, MAX_VALUE, MIN_VALUE, NUMERALS,
};
