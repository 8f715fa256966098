//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Everything here is pure and deterministic.

mod code;
mod feedback;
mod space;
mod turn;

pub use code::{CODE_LENGTH, Code, CodeError, SYMBOL_COUNT};
pub use feedback::Feedback;
pub use space::{CODE_SPACE_SIZE, all_valid_codes};
pub use turn::TurnRecord;

/// Maximum number of guesses the code breaker gets
pub const MAX_TURNS: usize = 12;
