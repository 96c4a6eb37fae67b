//! `0r`-prefixed Roman numeral integer literals.
//!
//! A literal is written `0r` (or `0R`) followed by numeral letters in either
//! case, optionally split by single underscores: `0rXIV`, `0r_MCM_XC`,
//! `0Rmmxxiv`. [`parse_literal`] additionally accepts surrounding whitespace
//! and a sign, the way integer parsing from text usually does.
//!
//! # Example
//!
//! ```
//! use roman_literal::{format_literal, parse_literal};
//!
//! assert_eq!(parse_literal("0rXIV").unwrap(), 14);
//! assert_eq!(parse_literal("  -0rXXX_III ").unwrap(), -33);
//! assert_eq!(format_literal(-14).unwrap(), "-0rXIV");
//! assert!(parse_literal("0rIIII").is_err());
//! ```

mod error;
mod format;
mod parse;

pub use error::LiteralError;
pub use format::format_literal;
pub use parse::{parse_literal, scan_literal};
