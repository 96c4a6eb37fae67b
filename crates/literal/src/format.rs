use roman_numerals::to_roman;

use crate::LiteralError;

/// Formats `n` as a `0r` literal, with a leading `-` for negative values.
///
/// # Errors
///
/// [`LiteralError::OutOfRange`] unless `|n|` is in `1..=3999`.
///
/// # Example
///
/// ```
/// use roman_literal::format_literal;
///
/// assert_eq!(format_literal(2024).unwrap(), "0rMMXXIV");
/// assert_eq!(format_literal(-4).unwrap(), "-0rIV");
/// assert!(format_literal(0).is_err());
/// ```
pub fn format_literal(n: i32) -> Result<String, LiteralError> {
    let magnitude = n.checked_abs().ok_or(LiteralError::OutOfRange(n))?;
    let numeral = to_roman(magnitude).map_err(|_| LiteralError::OutOfRange(n))?;
    let mut out = String::with_capacity(numeral.len() + 3);
    if n < 0 {
        out.push('-');
    }
    out.push_str("0r");
    out.push_str(&numeral);
    Ok(out)
}
