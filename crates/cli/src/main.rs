mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::RunArgs;
use commands::{init, run, validate};

/// Allelefix: Monte-Carlo estimates of allele fixation
///
/// Simulates the fate of a new allele in a diploid Wright-Fisher population
/// under genetic drift and selection, for every parameter set of an input
/// table, and reports fixation probabilities and times.
#[derive(Parser, Debug)]
#[command(name = "allelefix")]
#[command(author, version, about = "Simulates allele fixation under drift and selection", long_about = None)]
struct Cli {
    /// Number of worker threads
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every parameter set of the input table.
    ///
    /// This is also what happens when no subcommand is given.
    Run(Box<RunArgs>),

    /// Write a template parameter table.
    Init {
        /// Parameter table to create
        #[arg(short, long, default_value = defaults::INPUT_FILE)]
        input: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check a parameter table without running it.
    Validate {
        /// Parameter table to check
        #[arg(short, long, default_value = defaults::INPUT_FILE)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => {
            run::run_simulation(&args, cli.threads)?;
        }
        None => {
            run::run_simulation(&RunArgs::default(), cli.threads)?;
        }
        Some(Commands::Init { input, force }) => {
            init::init_input(&input, force)?;
        }
        Some(Commands::Validate { input }) => {
            validate::validate_input(&input)?;
        }
    }

    Ok(())
}
