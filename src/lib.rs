//! Mastermind
//!
//! Console Mastermind against the computer: 4-symbol codes over the symbols
//! 1 to 6, 12 turns, and a computer breaker that always guesses a code
//! consistent with every clue so far.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{Code, Feedback};
//!
//! let secret = Code::new("4521").unwrap();
//! let guess = Code::new("4512").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! println!("{feedback}"); // 2 exact, 2 partial
//! ```

// Core domain types
pub mod core;

// Computer code breaker
pub mod solver;

// Roles and the turn controller
pub mod game;

// Console front end
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
