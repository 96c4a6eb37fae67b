/// One substitution rule: `symbol` stands for `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralRule {
    pub symbol: &'static str,
    pub value: i32,
}

impl NumeralRule {
    /// Number of letters in the symbol.
    pub const fn len(&self) -> usize {
        self.symbol.len()
    }
}

/// Substitution rules, strictly descending by value.
///
/// The encoder walks this table greedily, so the order must not change.
pub const NUMERALS: [NumeralRule; 13] = [
    NumeralRule { symbol: "M", value: 1000 },
    NumeralRule { symbol: "CM", value: 900 },
    NumeralRule { symbol: "D", value: 500 },
    NumeralRule { symbol: "CD", value: 400 },
    NumeralRule { symbol: "C", value: 100 },
    NumeralRule { symbol: "XC", value: 90 },
    NumeralRule { symbol: "L", value: 50 },
    NumeralRule { symbol: "XL", value: 40 },
    NumeralRule { symbol: "X", value: 10 },
    NumeralRule { symbol: "IX", value: 9 },
    NumeralRule { symbol: "V", value: 5 },
    NumeralRule { symbol: "IV", value: 4 },
    NumeralRule { symbol: "I", value: 1 },
];

/// Smallest encodable value.
pub const MIN_VALUE: i32 = 1;

/// Largest encodable value.
pub const MAX_VALUE: i32 = 3999;

/// Buffer size that fits any numeral plus a terminator slot.
pub const MAX_ROMAN_SIZE: usize = 16;

/// Length of the longest canonical numeral, `MMMDCCCLXXXVIII` (3888).
pub const MAX_NUMERAL_LEN: usize = MAX_ROMAN_SIZE - 1;
