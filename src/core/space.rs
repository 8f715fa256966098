//! Candidate space enumeration
//!
//! The full space is every 4-symbol code over the 6-symbol alphabet.

use super::code::{CODE_LENGTH, Code, SYMBOL_COUNT};

/// Number of codes in the full space (6^4)
pub const CODE_SPACE_SIZE: usize = (SYMBOL_COUNT as usize).pow(CODE_LENGTH as u32);

/// Enumerate every valid code in lexicographic order
///
/// Returns a freshly allocated vector on every call, so each solver or
/// code maker owns its own copy.
///
/// # Examples
/// ```
/// use mastermind::core::{CODE_SPACE_SIZE, all_valid_codes};
///
/// let codes = all_valid_codes();
/// assert_eq!(codes.len(), CODE_SPACE_SIZE);
/// assert_eq!(codes[0].to_string(), "1111");
/// assert_eq!(codes[codes.len() - 1].to_string(), "6666");
/// ```
#[must_use]
pub fn all_valid_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(CODE_SPACE_SIZE);
    let mut symbols = [1u8; CODE_LENGTH];

    loop {
        // Digits are always within 1..=SYMBOL_COUNT here
        if let Ok(code) = Code::from_symbols(symbols) {
            codes.push(code);
        }

        // Odometer increment, rightmost position fastest
        let Some(position) = symbols.iter().rposition(|&s| s < SYMBOL_COUNT) else {
            break;
        };
        symbols[position] += 1;
        for later in &mut symbols[position + 1..] {
            *later = 1;
        }
    }

    codes
}
