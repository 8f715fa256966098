//! Turn controller
//!
//! Runs up to `MAX_TURNS` rounds between a code maker and a code breaker:
//!
//! ```text
//! AwaitingGuess --guess--> Scoring --hit--------------> Won
//!       ^                     |
//!       +-----miss, turns left+--miss, last turn------> Exhausted
//! ```

use super::interface::GameInterface;
use super::roles::{CodeBreaker, CodeMaker, Player};
use crate::core::{Code, MAX_TURNS, TurnRecord};
use anyhow::Result;
use log::{debug, info};
use std::fmt;

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Scoring(Code),
    Won,
    Exhausted,
}

impl GameState {
    /// Check if no further transitions are possible
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scored {
    /// The guess was the secret
    Won,
    /// Wrong guess, turns remain
    Miss(TurnRecord),
    /// Wrong guess on the final turn
    Exhausted(TurnRecord),
}

/// Misuse of the turn controller's transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted while another was still unscored or the game was over
    NotAwaitingGuess(GameState),
    /// Scoring was requested with no guess pending
    NothingToScore(GameState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAwaitingGuess(state) => {
                write!(f, "Cannot accept a guess in state {state:?}")
            }
            Self::NothingToScore(state) => write!(f, "No guess to score in state {state:?}"),
        }
    }
}

impl std::error::Error for GameError {}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Exhausted,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub result: GameResult,
    /// Guesses made, including the winning one
    pub turns: usize,
    pub secret: Code,
    pub breaker: Player,
    /// Every missed guess with its clues
    pub history: Vec<TurnRecord>,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.result, GameResult::Won)
    }
}

/// One game between a maker and whichever breaker plays against it
pub struct Game<M: CodeMaker> {
    maker: M,
    state: GameState,
    turns: usize,
    history: Vec<TurnRecord>,
}

impl<M: CodeMaker> Game<M> {
    #[must_use]
    pub const fn new(maker: M) -> Self {
        Self {
            maker,
            state: GameState::AwaitingGuess,
            turns: 0,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses made so far
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Missed guesses with their clues
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Hand a guess to the controller (`AwaitingGuess -> Scoring`)
    ///
    /// # Errors
    /// Returns `GameError::NotAwaitingGuess` outside `AwaitingGuess`.
    pub fn submit(&mut self, guess: Code) -> Result<(), GameError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GameError::NotAwaitingGuess(self.state));
        }
        self.turns += 1;
        self.state = GameState::Scoring(guess);
        Ok(())
    }

    /// Score the pending guess and move to the next state
    ///
    /// # Errors
    /// Returns `GameError::NothingToScore` if no guess is pending.
    pub fn score(&mut self) -> Result<Scored, GameError> {
        let GameState::Scoring(guess) = self.state else {
            return Err(GameError::NothingToScore(self.state));
        };

        if guess == self.maker.secret_code() {
            self.state = GameState::Won;
            debug!("turn {}: {guess} is the secret", self.turns);
            return Ok(Scored::Won);
        }

        let record = TurnRecord::new(guess, self.maker.feedback(&guess));
        self.history.push(record);

        if self.turns >= MAX_TURNS {
            self.state = GameState::Exhausted;
            debug!("turn {}: {guess} missed, no turns left", self.turns);
            Ok(Scored::Exhausted(record))
        } else {
            self.state = GameState::AwaitingGuess;
            debug!("turn {}: {guess} scored {}", self.turns, record.feedback);
            Ok(Scored::Miss(record))
        }
    }

    /// Play the game to the end
    ///
    /// Clues are shown after every missed guess; the outcome is announced
    /// once the breaker wins or runs out of turns.
    ///
    /// # Errors
    /// Returns an error if the breaker cannot produce a guess, the interface
    /// cannot be written, or the game was already finished.
    pub fn play<B: CodeBreaker + ?Sized>(
        &mut self,
        breaker: &mut B,
        ui: &mut dyn GameInterface,
    ) -> Result<GameOutcome> {
        info!("game started, {:?} breaker", breaker.player());
        let mut previous: Option<TurnRecord> = self.history.last().copied();

        loop {
            let guess = breaker.next_guess(self.turns + 1, previous.as_ref(), ui)?;
            self.submit(guess)?;

            let result = match self.score()? {
                Scored::Won => GameResult::Won,
                Scored::Miss(record) => {
                    ui.show_clues(&record)?;
                    previous = Some(record);
                    continue;
                }
                Scored::Exhausted(record) => {
                    ui.show_clues(&record)?;
                    GameResult::Exhausted
                }
            };

            let outcome = GameOutcome {
                result,
                turns: self.turns,
                secret: self.maker.secret_code(),
                breaker: breaker.player(),
                history: self.history.clone(),
            };
            info!("game over: {:?} after {} turns", outcome.result, outcome.turns);
            ui.show_outcome(&outcome)?;
            return Ok(outcome);
        }
    }
}
