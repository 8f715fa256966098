//! Interface for unattended games

use crate::core::{Code, TurnRecord};
use crate::game::{CodeRequest, GameInterface, GameOutcome};
use anyhow::{Result, bail};

/// Shows nothing and has nobody to ask for input
///
/// Used when the computer plays both seats, e.g. benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl GameInterface for Headless {
    fn read_code(&mut self, request: CodeRequest) -> Result<Code> {
        bail!("no human input available for {request:?}")
    }

    fn show_guess(&mut self, _turn: usize, _guess: Code) -> Result<()> {
        Ok(())
    }

    fn show_clues(&mut self, _record: &TurnRecord) -> Result<()> {
        Ok(())
    }

    fn show_outcome(&mut self, _outcome: &GameOutcome) -> Result<()> {
        Ok(())
    }
}
