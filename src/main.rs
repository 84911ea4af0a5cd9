//! u-nqueens CLI - solve 8-queens once, or benchmark a strategy over many runs.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use u_nqueens::ga::{GaConfig, DEFAULT_MUTATION_RATE};
use u_nqueens::harness::{run_batch, Strategy};
use u_nqueens::random::rng_from_seed;
use u_nqueens::sa::SaConfig;

/// Local and population search for the 8-queens problem
#[derive(Parser, Debug)]
#[command(name = "u-nqueens")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Random seed (default: random)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Repeat the search this many times and report time and success rate
    #[arg(short, long, global = true)]
    runs: Option<usize>,
}

/// Available strategies
#[derive(Subcommand, Debug)]
enum Commands {
    /// Genetic Algorithm
    Ga {
        /// Boards per generation
        #[arg(short, long, default_value = "50")]
        population: usize,

        /// Probability of mutating each child
        #[arg(short, long, default_value_t = DEFAULT_MUTATION_RATE)]
        mutation_rate: f64,

        /// Generation budget
        #[arg(short, long, default_value = "500")]
        generations: usize,

        /// Evaluation threads (default: one per CPU)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Evaluate on the calling thread only
        #[arg(long)]
        sequential: bool,
    },

    /// Steepest-ascent hill climbing from a random board
    Hill,

    /// Simulated annealing from a random board
    Anneal {
        /// Step budget
        #[arg(long, default_value = "1000")]
        steps: usize,

        /// Initial temperature
        #[arg(short, long, default_value = "100.0")]
        temperature: f64,

        /// Geometric cooling factor in (0, 1)
        #[arg(short, long, default_value = "0.95")]
        cooling_rate: f64,

        /// Return the best board seen instead of the final one
        #[arg(long)]
        return_best: bool,
    },
}

impl Commands {
    fn into_strategy(self) -> Strategy {
        match self {
            Commands::Ga {
                population,
                mutation_rate,
                generations,
                threads,
                sequential,
            } => {
                let mut config = GaConfig::default()
                    .with_population_size(population)
                    .with_mutation_rate(mutation_rate)
                    .with_max_generations(generations)
                    .with_parallel(!sequential);
                config.worker_threads = threads;
                Strategy::Evolutionary(config)
            }
            Commands::Hill => Strategy::HillClimbing,
            Commands::Anneal {
                steps,
                temperature,
                cooling_rate,
                return_best,
            } => Strategy::Annealing(
                SaConfig::default()
                    .with_max_steps(steps)
                    .with_initial_temperature(temperature)
                    .with_cooling_rate(cooling_rate)
                    .with_return_best(return_best),
            ),
        }
    }
}

fn execute(args: Args) -> u_nqueens::Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let strategy = args.command.into_strategy();

    if let Some(runs) = args.runs {
        let report = run_batch(&strategy, runs, &mut rng)?;
        println!("{report}");
        return Ok(());
    }

    strategy.validate()?;
    let outcome = strategy.solve(&mut rng)?;
    if let Some(initial) = outcome.initial {
        println!("Initial Board:");
        print!("{initial}");
    }
    println!("Solution Board:");
    print!("{}", outcome.board);
    println!("Attacking Pairs: {}", outcome.conflicts);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
