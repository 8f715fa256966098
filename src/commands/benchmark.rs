//! Benchmark command
//!
//! Plays the computer breaker against a sample of secrets and measures it.

use crate::console::Headless;
use crate::core::{Code, all_valid_codes};
use crate::game::simulate;
use anyhow::Result;
use log::info;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` secrets uniformly (with replacement) from the code space
#[must_use]
pub fn sample_secrets<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Code> {
    let codes = all_valid_codes();
    (0..count)
        .filter_map(|_| codes.choose(&mut *rng).copied())
        .collect()
}

/// Run benchmark on a set of secrets
///
/// Turn statistics only count solved games.
///
/// # Errors
///
/// Returns an error if a simulated game fails.
pub fn run_benchmark(secrets: &[Code]) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &secret in secrets {
        let outcome = simulate(secret, &mut Headless)?;
        if !outcome.is_won() {
            continue;
        }

        solved += 1;
        total_turns += outcome.turns;
        min_turns = min_turns.min(outcome.turns);
        max_turns = max_turns.max(outcome.turns);
        *distribution.entry(outcome.turns).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();
    info!("benchmarked {total_codes} codes in {duration:?}");

    Ok(BenchmarkResult {
        total_codes,
        solved,
        failed: total_codes - solved,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TURNS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(count: usize) -> Vec<Code> {
        sample_secrets(count, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&sample(20)).unwrap();

        assert_eq!(result.total_codes, 20);
        assert_eq!(result.solved, 20);
        assert_eq!(result.failed, 0);
        assert!(result.total_turns > 0);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= MAX_TURNS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&sample(30)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&sample(25)).unwrap();

        // Average should be between min and max
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);

        for &turns in result.distribution.keys() {
            assert!((1..=MAX_TURNS).contains(&turns));
        }
    }

    #[test]
    fn benchmark_empty_code_list() {
        let result = run_benchmark(&[]).unwrap();

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn sample_secrets_is_seeded() {
        assert_eq!(sample(10), sample(10));
        assert_eq!(sample(10).len(), 10);
        assert!(sample_secrets(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn benchmark_known_secret() {
        let result = run_benchmark(&[Code::new("1234").unwrap()]).unwrap();
        assert_eq!(result.min_turns, 3);
        assert_eq!(result.max_turns, 3);
        assert_eq!(result.distribution.get(&3), Some(&1));
    }
}
