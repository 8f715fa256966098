//! Interactive game against the computer

use crate::console::Console;
use crate::game::{
    ComputerBreaker, ComputerMaker, Game, GameOutcome, HumanBreaker, HumanMaker, Pacing, Role,
};
use anyhow::Result;
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run one full game at the console
///
/// Shows the rules, asks for a role, then plays the human against the computer
/// in the other seat.
///
/// # Errors
///
/// Returns an error if console input closes early or output cannot be written.
pub fn run_play<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    pacing: Pacing,
    rng: &mut G,
) -> Result<GameOutcome> {
    console.print_instructions()?;
    let role = console.read_role()?;
    info!("human plays the {role:?}");

    match role {
        Role::Breaker => {
            let mut game = Game::new(ComputerMaker::random(rng));
            game.play(&mut HumanBreaker::new(), console)
        }
        Role::Maker => {
            let maker = HumanMaker::prompt(console)?;
            let mut game = Game::new(maker);
            game.play(&mut ComputerBreaker::new(pacing), console)
        }
    }
}
