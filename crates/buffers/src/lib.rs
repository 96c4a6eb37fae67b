//! Text buffer utilities for the Roman numeral codecs.
//!
//! # Overview
//!
//! - [`Reader`] - Reads ASCII text from a byte slice with cursor tracking
//! - [`Writer`] - Writes ASCII text into a fixed-capacity buffer
//! - [`is_roman_digit`] - Classifies Roman numeral letters
//! - [`cmp_ascii_ignore_case`] - Compares two spans ignoring ASCII case
//!
//! # Example
//!
//! ```
//! use roman_buffers::{is_roman_digit, Reader, Writer};
//!
//! let mut writer = Writer::with_capacity(16);
//! writer.try_ascii("XIV").unwrap();
//! assert_eq!(writer.as_str(), "XIV");
//!
//! let mut reader = Reader::new(b"xiv + 1");
//! assert_eq!(reader.take_while(is_roman_digit), b"xiv");
//! assert_eq!(reader.x, 3);
//! ```

mod cmp;
mod digit;
mod reader;
mod writer;

pub use cmp::cmp_ascii_ignore_case;
pub use digit::is_roman_digit;
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Writing would leave no room for the terminator slot.
    #[error("buffer overflow (capacity {capacity})")]
    Overflow { capacity: usize },
}
