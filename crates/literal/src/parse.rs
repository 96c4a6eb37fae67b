//! Literal scanning on top of the numeral decoder.

use log::debug;
use roman_numerals::{from_roman, is_roman_digit, Reader, MAX_ROMAN_SIZE};

use crate::LiteralError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Prefix,
    Digit,
    Underscore,
}

fn char_at(bytes: &[u8]) -> char {
    let window = &bytes[..bytes.len().min(4)];
    String::from_utf8_lossy(window)
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Scans one unsigned `0r` literal at the reader's cursor.
///
/// The literal ends at the first byte that is neither a numeral letter nor
/// an underscore. That byte must not continue a word: a letter, a decimal
/// digit or any non-ASCII character there is reported as an invalid digit,
/// so `0rIZ` and `0r0` are errors rather than a short literal. On success
/// the cursor rests on that byte.
///
/// # Example
///
/// ```
/// use roman_literal::scan_literal;
/// use roman_numerals::Reader;
///
/// let mut reader = Reader::new(b"0rX_IV+1");
/// assert_eq!(scan_literal(&mut reader).unwrap(), 14);
/// assert_eq!(reader.x, 6);
/// ```
pub fn scan_literal(reader: &mut Reader<'_>) -> Result<i32, LiteralError> {
    let prefix_at = reader.x;
    if reader.peek() != Some(b'0') {
        return Err(LiteralError::MissingPrefix { offset: prefix_at });
    }
    reader.skip(1);
    if !matches!(reader.peek(), Some(b'r' | b'R')) {
        return Err(LiteralError::MissingPrefix { offset: prefix_at });
    }
    reader.skip(1);

    let mut digits: Vec<u8> = Vec::with_capacity(MAX_ROMAN_SIZE);
    let mut first_digit_at = reader.x;
    let mut last = Last::Prefix;
    while let Some(c) = reader.peek() {
        if is_roman_digit(c) {
            if digits.is_empty() {
                first_digit_at = reader.x;
            }
            digits.push(c);
            last = Last::Digit;
        } else if c == b'_' {
            if last == Last::Underscore {
                return Err(LiteralError::InvalidUnderscore { offset: reader.x });
            }
            last = Last::Underscore;
        } else {
            break;
        }
        reader.skip(1);
    }
    if last == Last::Underscore {
        return Err(LiteralError::InvalidUnderscore {
            offset: reader.x - 1,
        });
    }
    if let Some(c) = reader.peek() {
        if c.is_ascii_alphanumeric() || !c.is_ascii() {
            return Err(LiteralError::InvalidDigit {
                offset: reader.x,
                found: char_at(reader.rest()),
            });
        }
    }

    let mut numeral = Reader::new(&digits);
    from_roman(&mut numeral).map_err(|source| {
        debug!("roman literal at offset {} rejected: {}", prefix_at, source);
        LiteralError::Numeral {
            offset: first_digit_at,
            source,
        }
    })
}

/// Parses a complete, optionally signed `0r` literal.
///
/// Leading and trailing ASCII whitespace is ignored. Nothing else may
/// surround the literal.
///
/// # Errors
///
/// Those of [`scan_literal`], plus [`LiteralError::TrailingInput`] if text
/// follows the literal.
pub fn parse_literal(text: &str) -> Result<i32, LiteralError> {
    let mut reader = Reader::new(text.as_bytes());
    reader.take_while(|c| c.is_ascii_whitespace());
    let negative = match reader.peek() {
        Some(b'-') => {
            reader.skip(1);
            true
        }
        Some(b'+') => {
            reader.skip(1);
            false
        }
        _ => false,
    };

    let value = scan_literal(&mut reader)?;

    reader.take_while(|c| c.is_ascii_whitespace());
    if !reader.is_empty() {
        return Err(LiteralError::TrailingInput { offset: reader.x });
    }
    Ok(if negative { -value } else { value })
}
