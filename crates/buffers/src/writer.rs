//! Fixed-capacity ASCII writer.

use crate::BufferError;

/// Writes ASCII text into a buffer of fixed capacity.
///
/// One slot of the capacity is reserved for a terminator, so a writer with
/// capacity `n` holds at most `n - 1` bytes of text. Appends are checked one
/// at a time; a failed append leaves the writer unchanged.
///
/// # Example
///
/// ```
/// use roman_buffers::{BufferError, Writer};
///
/// let mut writer = Writer::with_capacity(3);
/// writer.try_ascii("CM").unwrap();
/// assert_eq!(writer.try_ascii("X"), Err(BufferError::Overflow { capacity: 3 }));
/// assert_eq!(writer.as_str(), "CM");
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    buf: String,
    capacity: usize,
}

impl Writer {
    /// Creates a writer that accepts at most `capacity - 1` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the capacity, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends `s`, failing if the text would reach the terminator slot.
    pub fn try_ascii(&mut self, s: &str) -> Result<(), BufferError> {
        if self.buf.len() + s.len() >= self.capacity {
            return Err(BufferError::Overflow {
                capacity: self.capacity,
            });
        }
        self.buf.push_str(s);
        Ok(())
    }

    /// Returns the written text.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Consumes the writer and returns the written text.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Discards the written text, keeping the capacity.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_up_to_terminator_slot() {
        let mut writer = Writer::with_capacity(4);
        writer.try_ascii("ab").unwrap();
        writer.try_ascii("c").unwrap();
        assert_eq!(
            writer.try_ascii("d"),
            Err(BufferError::Overflow { capacity: 4 })
        );
        assert_eq!(writer.as_str(), "abc");
        assert_eq!(writer.len(), 3);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut writer = Writer::with_capacity(0);
        assert!(writer.try_ascii("").is_err());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut writer = Writer::with_capacity(8);
        writer.try_ascii("MM").unwrap();
        writer.reset();
        assert!(writer.is_empty());
        assert_eq!(writer.capacity(), 8);
        writer.try_ascii("I").unwrap();
        assert_eq!(writer.into_string(), "I");
    }
}
