//! Mastermind code representation
//!
//! A Code is an ordered sequence of four symbols, each drawn from the
//! alphabet `1..=6`.

use std::fmt;
use std::str::FromStr;

/// Number of symbol positions in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct symbols in the alphabet (`1..=6`)
pub const SYMBOL_COUNT: u8 = 6;

/// A validated 4-symbol Mastermind code
///
/// Symbols are stored as their numeric values (1-6). Ordering is
/// lexicographic over the symbols, so `1111 < 1112 < ... < 6666`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidSymbol(char),
    SymbolOutOfRange(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Code may only contain digits 1-{SYMBOL_COUNT}, found '{ch}'")
            }
            Self::SymbolOutOfRange(value) => {
                write!(f, "Symbol {value} is outside the range 1-{SYMBOL_COUNT}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from text such as `"4521"`
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The text is not exactly 4 characters long
    /// - Any character is not a digit between 1 and 6
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new("4521").unwrap();
    /// assert_eq!(code.to_string(), "4521");
    ///
    /// assert!(Code::new("452").is_err());
    /// assert!(Code::new("4527").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(text.chars()) {
            *slot = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .filter(|d| (1..=SYMBOL_COUNT).contains(d))
                .ok_or(CodeError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }

    /// Build a code from raw symbol values
    ///
    /// # Errors
    /// Returns `CodeError::SymbolOutOfRange` if any value is outside `1..=6`.
    // Allow: range `contains` is not const
    #[allow(clippy::manual_range_contains)]
    pub const fn from_symbols(symbols: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut i = 0;
        while i < CODE_LENGTH {
            let symbol = symbols[i];
            if symbol < 1 || symbol > SYMBOL_COUNT {
                return Err(CodeError::SymbolOutOfRange(symbol));
            }
            i += 1;
        }
        Ok(Self(symbols))
    }

    /// Get the symbol values
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("4521").unwrap();
        assert_eq!(code.symbols(), &[4, 5, 2, 1]);
        assert_eq!(code.to_string(), "4521");
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new("452"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::new("45211"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::new(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_creation_invalid_symbols() {
        assert_eq!(Code::new("4520"), Err(CodeError::InvalidSymbol('0')));
        assert_eq!(Code::new("7111"), Err(CodeError::InvalidSymbol('7')));
        assert_eq!(Code::new("12a4"), Err(CodeError::InvalidSymbol('a')));
        assert_eq!(Code::new("12 4"), Err(CodeError::InvalidSymbol(' ')));
    }

    #[test]
    fn code_creation_non_ascii_counts_chars() {
        // Four characters, but not digits
        assert_eq!(Code::new("１２３４"), Err(CodeError::InvalidSymbol('１')));
    }

    #[test]
    fn code_from_symbols() {
        let code = Code::from_symbols([1, 1, 2, 2]).unwrap();
        assert_eq!(code, Code::new("1122").unwrap());
        assert_eq!(
            Code::from_symbols([1, 0, 2, 2]),
            Err(CodeError::SymbolOutOfRange(0))
        );
        assert_eq!(
            Code::from_symbols([1, 2, 3, 9]),
            Err(CodeError::SymbolOutOfRange(9))
        );
    }

    #[test]
    fn code_symbol_at() {
        let code = Code::new("4521").unwrap();
        assert_eq!(code.symbol_at(0), 4);
        assert_eq!(code.symbol_at(3), 1);
    }

    #[test]
    fn code_ordering_is_lexicographic() {
        let low = Code::new("1116").unwrap();
        let high = Code::new("1121").unwrap();
        assert!(low < high);
    }

    #[test]
    fn code_parse_via_from_str() {
        let code: Code = "3456".parse().unwrap();
        assert_eq!(code.to_string(), "3456");
        assert!("34567".parse::<Code>().is_err());
    }

    #[test]
    fn code_error_display() {
        assert_eq!(
            CodeError::InvalidLength(3).to_string(),
            "Code must be exactly 4 digits, got 3"
        );
        assert_eq!(
            CodeError::InvalidSymbol('9').to_string(),
            "Code may only contain digits 1-6, found '9'"
        );
    }
}
