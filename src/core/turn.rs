//! A scored guess

use super::{Code, Feedback};

/// One guess together with the clues it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

impl TurnRecord {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn scored(secret: &Code, guess: Code) -> Self {
        Self::new(guess, Feedback::evaluate(secret, &guess))
    }
}
