//! Code solving command
//!
//! Plays the computer breaker against a given secret and returns the solution path.

use crate::core::{Code, CodeError, Feedback, MAX_TURNS, TurnRecord};
use crate::solver::Solver;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: MAX_TURNS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific code with a fresh solver
///
/// # Errors
///
/// Returns an error if the secret is not a valid code (4 digits from 1 to 6).
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, CodeError> {
    let secret = Code::new(config.secret.trim())?;

    let mut solver = Solver::new();
    let mut previous: Option<TurnRecord> = None;
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns {
        // Next guess narrows with the previous feedback first
        let Some(guess) = solver.next_guess(previous.as_ref()) else {
            break;
        };
        let candidates_before = solver.remaining();

        let record = TurnRecord::scored(&secret, guess);
        let candidates_after = solver
            .candidates()
            .iter()
            .filter(|c| Feedback::evaluate(c, &guess) == record.feedback)
            .count();

        steps.push(GuessStep {
            guess,
            feedback: record.feedback,
            candidates_before,
            candidates_after,
        });

        if record.feedback.is_win() {
            return Ok(SolveResult {
                success: true,
                steps,
                secret,
            });
        }
        previous = Some(record);
    }

    Ok(SolveResult {
        success: false,
        steps,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_SPACE_SIZE;
    use crate::solver::OPENER;

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code(SolveConfig::new("1234".to_string())).unwrap();

        assert!(result.success);
        assert_eq!(result.secret.to_string(), "1234");
        let guesses: Vec<String> = result.steps.iter().map(|s| s.guess.to_string()).collect();
        assert_eq!(guesses, ["1122", "1233", "1234"]);
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code(SolveConfig::new("6543".to_string())).unwrap();

        assert!(!result.steps.is_empty());
        assert_eq!(result.steps[0].guess, OPENER);
        assert_eq!(result.steps[0].candidates_before, CODE_SPACE_SIZE);

        // Each step should show candidate reduction (or stay same)
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }

        // Later steps start where earlier ones ended
        for pair in result.steps.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }

        let last = result.steps.last().unwrap();
        assert!(last.feedback.is_win());
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_code(SolveConfig::new("1239".to_string())).is_err());
        assert!(solve_code(SolveConfig::new("123".to_string())).is_err());
    }

    #[test]
    fn solve_with_max_turns_limit() {
        let mut config = SolveConfig::new("6543".to_string());
        config.max_turns = 1;

        let result = solve_code(config).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn solve_opener_first_turn() {
        let result = solve_code(SolveConfig::new("1122".to_string())).unwrap();
        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].candidates_after, 1);
    }
}
