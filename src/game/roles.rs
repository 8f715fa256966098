//! Code maker and code breaker roles
//!
//! Each role is played either by a human at the console or by the computer.
//! The turn controller only sees the two capability traits.

use super::interface::{CodeRequest, GameInterface};
use super::pacing::Pacing;
use crate::core::{CODE_SPACE_SIZE, Code, Feedback, TurnRecord, all_valid_codes};
use crate::solver::Solver;
use anyhow::Result;
use log::debug;
use rand::Rng;

/// Who is sitting in a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

/// The role the human chose to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Breaker,
    Maker,
}

impl Role {
    /// Parse a role choice: exactly `B` or `M`, case-insensitive
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "B" | "b" => Some(Self::Breaker),
            "M" | "m" => Some(Self::Maker),
            _ => None,
        }
    }
}

/// Holds the secret and scores guesses against it
pub trait CodeMaker {
    /// The secret code for this game
    fn secret_code(&self) -> Code;

    /// Clues for `guess`
    fn feedback(&self, guess: &Code) -> Feedback {
        Feedback::evaluate(&self.secret_code(), guess)
    }
}

/// Produces guesses, one per turn
pub trait CodeBreaker {
    /// Who is producing the guesses
    fn player(&self) -> Player;

    /// Produce the guess for `turn` (1-based, counted by the controller)
    ///
    /// `previous` is the last scored guess, `None` on the first turn.
    ///
    /// # Errors
    /// Returns an error if a human breaker's input cannot be read.
    fn next_guess(
        &mut self,
        turn: usize,
        previous: Option<&TurnRecord>,
        ui: &mut dyn GameInterface,
    ) -> Result<Code>;
}

/// Computer maker: picks a secret uniformly from the candidate space
#[derive(Debug, Clone, Copy)]
pub struct ComputerMaker {
    secret: Code,
}

impl ComputerMaker {
    /// Draw a random secret from `rng`
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let codes = all_valid_codes();
        let secret = codes[rng.random_range(0..CODE_SPACE_SIZE)];
        debug!("computer maker chose secret {secret}");
        Self { secret }
    }

    /// Use a known secret
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self { secret }
    }
}

impl CodeMaker for ComputerMaker {
    fn secret_code(&self) -> Code {
        self.secret
    }
}

/// Human maker: the secret is typed in once at the start
#[derive(Debug, Clone, Copy)]
pub struct HumanMaker {
    secret: Code,
}

impl HumanMaker {
    /// Ask the human for a secret code
    ///
    /// # Errors
    /// Returns an error if input closes before a valid code is entered.
    pub fn prompt(ui: &mut dyn GameInterface) -> Result<Self> {
        let secret = ui.read_code(CodeRequest::Secret)?;
        Ok(Self { secret })
    }
}

impl CodeMaker for HumanMaker {
    fn secret_code(&self) -> Code {
        self.secret
    }
}

/// Human breaker: one guess typed in per turn
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanBreaker;

impl HumanBreaker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CodeBreaker for HumanBreaker {
    fn player(&self) -> Player {
        Player::Human
    }

    fn next_guess(
        &mut self,
        turn: usize,
        _previous: Option<&TurnRecord>,
        ui: &mut dyn GameInterface,
    ) -> Result<Code> {
        ui.read_code(CodeRequest::Guess { turn })
    }
}

/// Computer breaker: drives a `Solver`, pacing its guesses for display
#[derive(Debug)]
pub struct ComputerBreaker {
    solver: Solver,
    pacing: Pacing,
}

impl ComputerBreaker {
    #[must_use]
    pub fn new(pacing: Pacing) -> Self {
        Self {
            solver: Solver::new(),
            pacing,
        }
    }

    /// Candidates the solver still considers possible
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.solver.remaining()
    }
}

impl CodeBreaker for ComputerBreaker {
    fn player(&self) -> Player {
        Player::Computer
    }

    /// # Panics
    /// Panics if the feedback received so far rules out every code, which
    /// only happens when scoring itself is broken.
    fn next_guess(
        &mut self,
        turn: usize,
        previous: Option<&TurnRecord>,
        ui: &mut dyn GameInterface,
    ) -> Result<Code> {
        self.pacing.pause(previous.is_none());

        let guess = self
            .solver
            .next_guess(previous)
            .expect("candidate set is empty: feedback contradicts every code");

        ui.show_guess(turn, guess)?;
        Ok(guess)
    }
}
