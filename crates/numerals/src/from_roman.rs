//! Roman numeral to integer decoding.

use log::{debug, trace};
use roman_buffers::{cmp_ascii_ignore_case, is_roman_digit, Reader, Writer};

use crate::constants::MAX_ROMAN_SIZE;
use crate::to_roman::to_roman_into;
use crate::RomanError;

/// Returns the face value of a numeral letter in either case.
pub fn numeral_value(c: u8) -> Option<i32> {
    match c.to_ascii_uppercase() {
        b'I' => Some(1),
        b'V' => Some(5),
        b'X' => Some(10),
        b'L' => Some(50),
        b'C' => Some(100),
        b'D' => Some(500),
        b'M' => Some(1000),
        _ => None,
    }
}

/// Sums `digits` right to left, subtracting a letter that is smaller than
/// the letter after it and adding it otherwise.
///
/// This gives the right value for every canonical numeral but also produces
/// a value for many malformed ones (`IIII`, `IC`, `VV`), so the result must
/// be checked by re-encoding. Returns `None` if `digits` contains anything
/// other than numeral letters.
///
/// # Example
///
/// ```
/// use roman_numerals::relaxed_value;
///
/// assert_eq!(relaxed_value(b"XIV"), Some(14));
/// assert_eq!(relaxed_value(b"IC"), Some(99));
/// assert_eq!(relaxed_value(b"X1"), None);
/// ```
pub fn relaxed_value(digits: &[u8]) -> Option<i32> {
    let mut total: i32 = 0;
    let mut prev = 0;
    for &c in digits.iter().rev() {
        let value = numeral_value(c)?;
        if value < prev {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
        }
        prev = value;
    }
    Some(total)
}

/// Decodes the numeral at the reader's cursor.
///
/// The cursor is first moved past the longest run of numeral letters
/// (`IVXLCDM` in either case). This happens even when decoding then fails,
/// so callers can report the failing position or keep scanning from there.
///
/// # Errors
///
/// - [`RomanError::EmptyNumeral`] if the cursor is not on a numeral letter.
/// - [`RomanError::NumeralTooLong`] if the run is 16 letters or longer.
/// - [`RomanError::InvalidNumeral`] if the run is not the canonical numeral
///   of its own value.
///
/// # Example
///
/// ```
/// use roman_numerals::{from_roman, Reader, RomanError};
///
/// let mut reader = Reader::new(b"xiv;IIX;");
/// assert_eq!(from_roman(&mut reader), Ok(14));
/// assert_eq!(reader.x, 3);
///
/// reader.skip(1);
/// assert_eq!(from_roman(&mut reader), Err(RomanError::InvalidNumeral));
/// assert_eq!(reader.x, 7);
/// ```
pub fn from_roman(reader: &mut Reader<'_>) -> Result<i32, RomanError> {
    let start = reader.x;
    let digits = reader.take_while(is_roman_digit);
    trace!("scanned {} roman digit(s) at offset {}", digits.len(), start);

    if digits.is_empty() {
        return Err(RomanError::EmptyNumeral);
    }
    if digits.len() >= MAX_ROMAN_SIZE {
        debug!("roman numeral at offset {} is {} letters long", start, digits.len());
        return Err(RomanError::NumeralTooLong {
            length: digits.len(),
        });
    }

    let candidate = relaxed_value(digits).ok_or(RomanError::InvalidNumeral)?;
    let mut canonical = Writer::with_capacity(MAX_ROMAN_SIZE);
    if let Err(err) = to_roman_into(candidate, &mut canonical) {
        debug!(
            "roman numeral {:?} sums to {}: {}",
            String::from_utf8_lossy(digits),
            candidate,
            err
        );
        return Err(RomanError::InvalidNumeral);
    }
    if !cmp_ascii_ignore_case(digits, canonical.as_bytes()) {
        debug!(
            "roman numeral {:?} is not canonical, expected {:?}",
            String::from_utf8_lossy(digits),
            canonical.as_str()
        );
        return Err(RomanError::InvalidNumeral);
    }
    Ok(candidate)
}

/// Decodes `text`, which must consist of a single numeral and nothing else.
///
/// # Errors
///
/// Those of [`from_roman`], plus [`RomanError::TrailingInput`] if anything
/// follows the numeral.
pub fn parse_roman(text: &str) -> Result<i32, RomanError> {
    let mut reader = Reader::new(text.as_bytes());
    let value = from_roman(&mut reader)?;
    if !reader.is_empty() {
        return Err(RomanError::TrailingInput { offset: reader.x });
    }
    Ok(value)
}
