//! Test all codes - exhaustive solver evaluation
//!
//! Runs the computer breaker against every code in the space and generates statistics.

use crate::console::Headless;
use crate::core::{Code, all_valid_codes};
use crate::game::{GameOutcome, simulate};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Games taking at least this many turns are listed as hardest
pub const HARD_CODE_TURNS: usize = 7;

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub best_code: Option<(Code, usize)>,
    pub hardest_codes: Vec<(Code, usize)>,
}

/// Run the solver on every code (or the first `limit` in lexicographic order)
///
/// Games run in parallel; each owns its own solver.
///
/// # Errors
///
/// Returns an error if a simulated game fails or the progress bar template is invalid.
pub fn run_test_all(limit: Option<usize>, show_progress: bool) -> Result<TestAllStatistics> {
    let mut secrets = all_valid_codes();
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    let pb = if show_progress {
        println!("🎯 Testing {} codes...", secrets.len());
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let outcomes: Vec<GameOutcome> = secrets
        .par_iter()
        .map(|&secret| {
            let outcome = simulate(secret, &mut Headless);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();
    info!("tested {} codes in {total_time:?}", outcomes.len());

    Ok(summarize(&outcomes, total_time))
}

fn summarize(outcomes: &[GameOutcome], total_time: Duration) -> TestAllStatistics {
    let mut turn_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for outcome in outcomes.iter().filter(|o| o.is_won()) {
        *turn_distribution.entry(outcome.turns).or_insert(0) += 1;
    }

    let solved_count = outcomes.iter().filter(|o| o.is_won()).count();
    let failed_count = outcomes.len() - solved_count;

    let total_turns: usize = outcomes
        .iter()
        .filter(|o| o.is_won())
        .map(|o| o.turns)
        .sum();
    let average_turns = if solved_count > 0 {
        total_turns as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_turns = turn_distribution.keys().copied().max().unwrap_or(0);
    let min_turns = turn_distribution.keys().copied().min().unwrap_or(0);

    let best_code = outcomes
        .iter()
        .filter(|o| o.is_won())
        .min_by_key(|o| o.turns)
        .map(|o| (o.secret, o.turns));

    let mut hardest_codes: Vec<(Code, usize)> = outcomes
        .iter()
        .filter(|o| o.is_won() && o.turns >= HARD_CODE_TURNS)
        .map(|o| (o.secret, o.turns))
        .collect();
    hardest_codes.sort_by_key(|&(code, turns)| (std::cmp::Reverse(turns), code));
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: outcomes.len(),
        solved: solved_count,
        failed: failed_count,
        turn_distribution,
        total_time,
        average_turns,
        max_turns,
        min_turns,
        best_code,
        hardest_codes,
    }
}
