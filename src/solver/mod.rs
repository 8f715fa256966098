//! Mastermind solving algorithm
//!
//! This module contains the consistent-candidate code breaker.

mod engine;

pub use engine::{OPENER, Solver};
