//! randstream: command line sampler.
//!
//! Prints values from seeded random sequences and validates generator
//! configuration files.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// randstream command line interface
#[derive(Parser)]
#[command(name = "randstream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first values of a named distribution, one per line
    Sample {
        /// Distribution: integers, naturals-geometric, positives-geometric, digits,
        /// big-naturals, floats, doubles-uniform, chars, strings, permutations
        #[arg(short, long)]
        distribution: String,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed word; repeat exactly eight times to override the configured seed
        #[arg(long = "seed-word", allow_negative_numbers = true)]
        seed_word: Vec<i32>,

        /// Override the primary scale
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<i32>,
    },

    /// Validate and print the effective configuration
    Check,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Sample {
            distribution,
            count,
            seed_word,
            scale,
        } => config::load(&cli.config)
            .and_then(|c| config::apply_overrides(c, seed_word, scale))
            .and_then(|c| commands::sample::run(&c, &distribution, count)),
        Commands::Check => config::load(&cli.config).and_then(|c| commands::check::run(&c)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
