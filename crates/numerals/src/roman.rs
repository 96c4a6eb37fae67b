//! Validated Roman numeral value type.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_VALUE, MIN_VALUE};
use crate::{parse_roman, to_roman, RomanError};

/// An integer in `1..=3999`, displayed as its Roman numeral.
///
/// `{}` prints the canonical upper-case numeral and `{:#}` the lower-case
/// one. Width and alignment flags are honored.
///
/// # Example
///
/// ```
/// use roman_numerals::Roman;
///
/// let n = Roman::new(1666).unwrap();
/// assert_eq!(n.to_string(), "MDCLXVI");
/// assert_eq!(format!("{:#}", n), "mdclxvi");
/// assert_eq!("mdclxvi".parse::<Roman>().unwrap(), n);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roman(u16);

impl Roman {
    /// `I`, the smallest representable value.
    pub const MIN: Roman = Roman(MIN_VALUE as u16);
    /// `MMMCMXCIX`, the largest representable value.
    pub const MAX: Roman = Roman(MAX_VALUE as u16);

    /// Wraps `n`, failing with [`RomanError::OutOfRange`] outside `1..=3999`.
    pub fn new(n: i32) -> Result<Self, RomanError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
            return Err(RomanError::OutOfRange(n));
        }
        u16::try_from(n)
            .map(Roman)
            .map_err(|_| RomanError::OutOfRange(n))
    }

    /// Returns the integer value.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = to_roman(i32::from(self.0)).map_err(|_| fmt::Error)?;
        if f.alternate() {
            f.pad(&numeral.to_ascii_lowercase())
        } else {
            f.pad(&numeral)
        }
    }
}

impl FromStr for Roman {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Roman::new(parse_roman(s)?)
    }
}

impl TryFrom<i32> for Roman {
    type Error = RomanError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Roman::new(n)
    }
}

impl From<Roman> for i32 {
    fn from(n: Roman) -> Self {
        i32::from(n.0)
    }
}

impl From<Roman> for u16 {
    fn from(n: Roman) -> Self {
        n.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Roman {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roman {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
