//! Game flow: roles, the turn controller, and pacing
//!
//! A game pairs one `CodeMaker` with one `CodeBreaker`. Either seat can be
//! human or computer; the controller treats both assignments the same way.

mod controller;
mod interface;
mod pacing;
mod roles;

pub use controller::{Game, GameError, GameOutcome, GameResult, GameState, Scored};
pub use interface::{CodeRequest, GameInterface};
pub use pacing::Pacing;
pub use roles::{
    CodeBreaker, CodeMaker, ComputerBreaker, ComputerMaker, HumanBreaker, HumanMaker, Player, Role,
};

use crate::core::Code;
use anyhow::Result;

/// Play the computer breaker against a known secret with no pacing
///
/// # Errors
/// Returns an error if `ui` fails to display the game.
pub fn simulate(secret: Code, ui: &mut dyn GameInterface) -> Result<GameOutcome> {
    let mut game = Game::new(ComputerMaker::with_secret(secret));
    let mut breaker = ComputerBreaker::new(Pacing::none());
    game.play(&mut breaker, ui)
}
