use allelefix_sim::simulation::{RunConfig, UndefinedPolicy};
use clap::Args;
use std::path::PathBuf;

use crate::defaults;

fn positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, found '{value}'")),
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Parameter table (semicolon-separated N;s;attempts rows)
    #[arg(short, long, default_value = defaults::INPUT_FILE)]
    pub input: PathBuf,

    /// Directory for the result tables
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Repetitions of every parameter set
    ///
    /// The averaged table is only written when this is greater than 1.
    #[arg(short, long, default_value_t = defaults::REPETITIONS, value_parser = positive)]
    pub repetitions: usize,

    /// Maximum generations of a single trajectory before it is abandoned
    #[arg(long, default_value_t = defaults::GENERATION_CAP)]
    pub generation_cap: u64,

    /// Master random seed (default: drawn from entropy and reported)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How repetitions without any fixation enter the averaged generation
    /// statistics (exclude, propagate)
    #[arg(long, default_value_t = defaults::UNDEFINED_POLICY)]
    pub undefined_policy: UndefinedPolicy,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Also write every record of the run as JSON to this file
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

impl RunArgs {
    /// Batch configuration for these arguments.
    pub fn run_config(&self, threads: Option<usize>) -> RunConfig {
        RunConfig::new(self.repetitions, self.generation_cap, self.seed)
            .with_threads(threads)
            .with_undefined_policy(self.undefined_policy)
            .with_resolved_seed()
    }
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(defaults::INPUT_FILE),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            repetitions: defaults::REPETITIONS,
            generation_cap: defaults::GENERATION_CAP,
            seed: None,
            undefined_policy: defaults::UNDEFINED_POLICY,
            no_progress: false,
            summary_json: None,
        }
    }
}
