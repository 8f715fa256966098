//! Mastermind - CLI
//!
//! Play Mastermind against the computer, or watch its solver at work.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use mastermind::{
    commands::{SolveConfig, run_benchmark, run_play, run_test_all, sample_secrets, solve_code},
    console::Console,
    game::Pacing,
    output::{print_benchmark_result, print_solve_result, print_test_all_statistics},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind against the computer: be the code maker or the code breaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the pauses between computer guesses
    #[arg(long, global = true)]
    fast: bool,

    /// Seed for the computer's random choices
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game at the console (default)
    Play,

    /// Watch the computer break a given secret code
    Solve {
        /// The secret code, 4 numbers from 1 to 6
        code: String,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test the solver on ALL possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pacing = if cli.fast {
                Pacing::none()
            } else {
                Pacing::interactive()
            };
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
            let outcome = run_play(&mut console, pacing, &mut rng)?;
            debug!("play finished: {:?}", outcome.result);
            Ok(())
        }
        Commands::Solve { code, verbose } => {
            let result = solve_code(SolveConfig::new(code))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random codes...");
            let secrets = sample_secrets(count, &mut rng);
            let result = run_benchmark(&secrets)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            println!();

            let stats = run_test_all(limit, true)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}
