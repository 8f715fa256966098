//! Seam between the turn controller and whatever shows the game to people

use super::GameOutcome;
use crate::core::{Code, TurnRecord};
use anyhow::Result;

/// What a human is being asked to type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRequest {
    /// The maker's secret, entered once before play starts
    Secret,
    /// The breaker's guess for the given turn (1-based)
    Guess { turn: usize },
}

/// Input and output for one game
///
/// `read_code` only returns once a valid code was entered; malformed lines
/// are rejected and re-prompted inside the implementation. It fails only
/// when input is no longer available.
pub trait GameInterface {
    /// Read a validated code from the human participant
    ///
    /// # Errors
    /// Returns an error if input closes or cannot be read.
    fn read_code(&mut self, request: CodeRequest) -> Result<Code>;

    /// Announce a guess made by the computer breaker
    ///
    /// # Errors
    /// Returns an error if output cannot be written.
    fn show_guess(&mut self, turn: usize, guess: Code) -> Result<()>;

    /// Show the clues earned by a missed guess
    ///
    /// # Errors
    /// Returns an error if output cannot be written.
    fn show_clues(&mut self, record: &TurnRecord) -> Result<()>;

    /// Announce the end of the game
    ///
    /// # Errors
    /// Returns an error if output cannot be written.
    fn show_outcome(&mut self, outcome: &GameOutcome) -> Result<()>;
}
