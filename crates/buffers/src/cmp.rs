//! Byte span comparison utilities.

/// Compares two byte spans for equality, ignoring ASCII case.
///
/// Spans of different length are never equal.
///
/// # Example
///
/// ```
/// use roman_buffers::cmp_ascii_ignore_case;
///
/// assert!(cmp_ascii_ignore_case(b"xIv", b"XIV"));
/// assert!(!cmp_ascii_ignore_case(b"XI", b"XIV"));
/// ```
pub fn cmp_ascii_ignore_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ascii_ignore_case() {
        assert!(cmp_ascii_ignore_case(b"", b""));
        assert!(cmp_ascii_ignore_case(b"mcm", b"MCM"));
        assert!(!cmp_ascii_ignore_case(b"MCM", b"MCD"));
        assert!(!cmp_ascii_ignore_case(b"M", b""));
    }
}
