//! Consistent-candidate Mastermind solver

use crate::core::{Code, Feedback, TurnRecord, all_valid_codes};
use log::debug;

/// Fixed opening guess (`AABB` pattern)
pub const OPENER: Code = match Code::from_symbols([1, 1, 2, 2]) {
    Ok(code) => code,
    Err(_) => panic!("opener must be a valid code"),
};

/// Computer code breaker
///
/// Keeps every code still consistent with the feedback seen so far and
/// always guesses the first of them. The true secret can never be filtered
/// out, because it scores itself exactly as the real feedback did.
#[derive(Debug, Clone)]
pub struct Solver {
    candidates: Vec<Code>,
}

impl Solver {
    /// Create a solver over the full candidate space
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: all_valid_codes(),
        }
    }

    /// Get the next guess given the previous turn
    ///
    /// # Parameters
    /// - `previous`: the last (guess, feedback) pair, or `None` on the first turn
    ///
    /// Returns the opener on the first turn. Otherwise narrows the candidate
    /// set with `previous` and returns the first remaining candidate, or
    /// `None` if the feedback is inconsistent with every code.
    pub fn next_guess(&mut self, previous: Option<&TurnRecord>) -> Option<Code> {
        let Some(record) = previous else {
            return Some(OPENER);
        };

        self.apply(record);
        self.candidates.first().copied()
    }

    /// Retain only candidates that would have produced the observed feedback
    pub fn apply(&mut self, record: &TurnRecord) {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::evaluate(candidate, &record.guess) == record.feedback);

        debug!(
            "guess {} scored {}: candidates {} -> {}",
            record.guess,
            record.feedback,
            before,
            self.candidates.len()
        );
    }

    /// Codes still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Count how many candidates remain
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
