//! Integer to Roman numeral encoding.

use roman_buffers::Writer;

use crate::constants::{MAX_ROMAN_SIZE, MAX_VALUE, MIN_VALUE, NUMERALS};
use crate::RomanError;

/// Encodes `n` into `out` and returns the number of letters written.
///
/// The capacity of `out` is checked at every append, so a numeral that does
/// not fit fails as soon as it reaches the terminator slot. Any `out` of
/// [`MAX_ROMAN_SIZE`] fits every valid input.
///
/// # Errors
///
/// - [`RomanError::OutOfRange`] if `n` is not in `1..=3999`.
/// - [`RomanError::BufferTooSmall`] if `out` runs out of room.
///
/// # Example
///
/// ```
/// use roman_numerals::{to_roman_into, RomanError, Writer};
///
/// let mut out = Writer::with_capacity(16);
/// assert_eq!(to_roman_into(3888, &mut out), Ok(15));
/// assert_eq!(out.as_str(), "MMMDCCCLXXXVIII");
///
/// let mut short = Writer::with_capacity(15);
/// assert_eq!(
///     to_roman_into(3888, &mut short),
///     Err(RomanError::BufferTooSmall { capacity: 15 })
/// );
/// ```
pub fn to_roman_into(n: i32, out: &mut Writer) -> Result<usize, RomanError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        return Err(RomanError::OutOfRange(n));
    }

    let start = out.len();
    let mut rest = n;
    for rule in NUMERALS.iter() {
        while rest >= rule.value {
            out.try_ascii(rule.symbol)?;
            rest -= rule.value;
        }
    }
    Ok(out.len() - start)
}

/// Encodes `n` as an upper-case Roman numeral.
///
/// # Example
///
/// ```
/// use roman_numerals::to_roman;
///
/// assert_eq!(to_roman(14).unwrap(), "XIV");
/// assert!(to_roman(0).is_err());
/// ```
pub fn to_roman(n: i32) -> Result<String, RomanError> {
    let mut out = Writer::with_capacity(MAX_ROMAN_SIZE);
    to_roman_into(n, &mut out)?;
    Ok(out.into_string())
}
