//! Display functions for command results

use super::formatters::{clue_markers, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult, TestAllStatistics};
use crate::core::MAX_TURNS;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {turn}: {} {}", step.guess, clue_markers(step.feedback));

        if verbose {
            println!("  Clues:      {}", step.feedback);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let turns = result.steps.len();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {turns} {}!",
                if turns == 1 { "turn" } else { "turns" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {turns} turns").red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.solved);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.3}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    print_distribution(&stats.turn_distribution, stats.solved);

    if let Some((code, turns)) = &stats.best_code {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {turns} {}",
            code.to_string().bright_green(),
            if *turns == 1 { "turn" } else { "turns" }
        );
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, turns) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({turns} turns)", code.to_string().yellow());
        }
    }
}

fn print_distribution(distribution: &FxHashMap<usize, usize>, solved: usize) {
    if solved == 0 {
        println!("  (no solved games)");
        return;
    }

    let max_count = distribution.values().copied().max().unwrap_or(0);
    let longest = distribution.keys().copied().max().unwrap_or(0).min(MAX_TURNS);
    for turns in 1..=longest {
        let count = distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {turns:2} turns: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }
}
