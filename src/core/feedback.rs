//! Feedback (clue) calculation
//!
//! Feedback is the pair of counts the code maker reports after every guess:
//! - exact: symbols in the right position
//! - partial: symbols present in the secret, but in another position
//!
//! Partial matches are counted against the secret symbols left over after
//! exact matches, each secret symbol being consumed at most once.

use super::code::{CODE_LENGTH, Code, SYMBOL_COUNT};
use std::fmt;

/// Clues for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Every symbol in its correct position
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create feedback from raw counts
    ///
    /// Returns `None` if `exact + partial` exceeds the code length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert!(Feedback::try_new(2, 2).is_some());
    /// assert!(Feedback::try_new(3, 2).is_none());
    /// ```
    #[must_use]
    pub const fn try_new(exact: u8, partial: u8) -> Option<Self> {
        if exact as usize + partial as usize > CODE_LENGTH {
            return None;
        }
        Some(Self { exact, partial })
    }

    /// Create feedback from counts known to be valid
    ///
    /// # Panics
    /// Panics if `exact + partial > 4`
    #[must_use]
    pub(crate) const fn new(exact: u8, partial: u8) -> Self {
        match Self::try_new(exact, partial) {
            Some(feedback) => feedback,
            None => panic!("feedback counts exceed code length"),
        }
    }

    /// Number of exact (right symbol, right position) matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial (right symbol, wrong position) matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if the guess matched the secret completely
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and remove those secret
    ///    symbols from the available pool
    /// 2. Second pass: for each remaining guess symbol, consume one matching
    ///    symbol from the pool if available
    ///
    /// A guess repeating a symbol more often than the unmatched secret holds
    /// it earns no extra partial matches.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::new("4521").unwrap();
    /// let guess = Code::new("4512").unwrap();
    /// assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::try_new(2, 2).unwrap());
    ///
    /// // Only two 1s in the secret: both exact, none left for partials
    /// let secret = Code::new("1122").unwrap();
    /// let guess = Code::new("1111").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!((feedback.exact(), feedback.partial()), (2, 0));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        let mut exact = 0u8;
        let mut matched = [false; CODE_LENGTH];
        let mut available = [0u8; SYMBOL_COUNT as usize];

        // First pass: exact matches; unmatched secret symbols form the pool
        for (i, (&s, &g)) in secret.symbols().iter().zip(guess.symbols()).enumerate() {
            if s == g {
                exact += 1;
                matched[i] = true;
            } else {
                available[usize::from(s - 1)] += 1;
            }
        }

        // Second pass: partial matches consume from the pool
        let mut partial = 0u8;
        for (&g, _) in guess
            .symbols()
            .iter()
            .zip(matched)
            .filter(|&(_, is_exact)| !is_exact)
        {
            let slot = &mut available[usize::from(g - 1)];
            if *slot > 0 {
                *slot -= 1;
                partial += 1;
            }
        }

        Self::new(exact, partial)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
