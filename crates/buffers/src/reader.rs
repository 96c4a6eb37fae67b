//! Text reader with cursor tracking.

/// A reader over ASCII text held in a byte slice.
///
/// The cursor `x` only ever moves forward. Callers that scan mixed text can
/// read `x` after a failed parse to learn how far the parser got.
///
/// # Example
///
/// ```
/// use roman_buffers::Reader;
///
/// let mut reader = Reader::new(b"MMXXIV!");
/// assert_eq!(reader.take_while(|c| c.is_ascii_uppercase()), b"MMXXIV");
/// assert_eq!(reader.peek(), Some(b'!'));
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// Both positions are clamped to the slice length.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.x)
    }

    /// Returns `true` once the cursor has reached the end.
    pub fn is_empty(&self) -> bool {
        self.x >= self.end
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    /// Advances the cursor by up to `length` bytes.
    pub fn skip(&mut self, length: usize) {
        self.x = self.x.saturating_add(length).min(self.end);
    }

    /// Advances past the maximal run of bytes matching `predicate` and
    /// returns that run.
    pub fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.x.min(self.end);
        let mut x = start;
        while x < self.end && predicate(self.uint8[x]) {
            x += 1;
        }
        self.x = x;
        &self.uint8[start..x]
    }

    /// Returns the unread bytes without advancing the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x.min(self.end)..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_skip() {
        let mut reader = Reader::new(b"abc");
        assert_eq!(reader.peek(), Some(b'a'));
        reader.skip(2);
        assert_eq!(reader.peek(), Some(b'c'));
        reader.skip(10);
        assert_eq!(reader.peek(), None);
        assert!(reader.is_empty());
        assert_eq!(reader.x, 3);
    }

    #[test]
    fn test_take_while_stops_at_first_mismatch() {
        let mut reader = Reader::new(b"aaab");
        assert_eq!(reader.take_while(|c| c == b'a'), b"aaa");
        assert_eq!(reader.x, 3);
        assert_eq!(reader.take_while(|c| c == b'a'), b"");
        assert_eq!(reader.x, 3);
        assert_eq!(reader.rest(), b"b");
    }

    #[test]
    fn test_from_slice_respects_end() {
        let mut reader = Reader::from_slice(b"aaaa", 1, 3);
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.take_while(|c| c == b'a'), b"aa");
        assert_eq!(reader.x, 3);
    }

    #[test]
    fn test_from_slice_clamps() {
        let reader = Reader::from_slice(b"ab", 5, 9);
        assert_eq!(reader.x, 2);
        assert_eq!(reader.end, 2);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_cursor_moved_past_end_by_hand() {
        let mut reader = Reader::new(b"XIV");
        reader.x = 7;
        assert_eq!(reader.size(), 0);
        assert!(reader.is_empty());
        assert_eq!(reader.peek(), None);
        assert_eq!(reader.rest(), b"");
        assert_eq!(reader.take_while(|_| true), b"");
        assert_eq!(reader.x, 3);
    }

    #[test]
    fn test_reset() {
        let mut reader = Reader::new(b"ab");
        reader.skip(1);
        reader.reset(b"xyz");
        assert_eq!(reader.x, 0);
        assert_eq!(reader.size(), 3);
    }
}
