/// Returns `true` for the seven Roman numeral letters in either case.
///
/// # Example
///
/// ```
/// use roman_buffers::is_roman_digit;
///
/// assert!(is_roman_digit(b'x'));
/// assert!(is_roman_digit(b'M'));
/// assert!(!is_roman_digit(b'_'));
/// ```
pub fn is_roman_digit(c: u8) -> bool {
    matches!(
        c,
        b'I' | b'V' | b'X' | b'L' | b'C' | b'D' | b'M' | b'i' | b'v' | b'x' | b'l' | b'c' | b'd' | b'm'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exactly_fourteen_bytes() {
        let accepted: Vec<u8> = (0..=u8::MAX).filter(|&c| is_roman_digit(c)).collect();
        assert_eq!(accepted, b"CDILMVXcdilmvx".to_vec());
    }
}
