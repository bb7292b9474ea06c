//! Shared default values for the command line.
//! These values are used by clap and by the implicit `run` when no
//! subcommand is given.

use allelefix_sim::simulation::{UndefinedPolicy, DEFAULT_GENERATION_CAP, DEFAULT_REPETITIONS};
use allelefix_sim::storage::DEFAULT_INPUT_FILE;

pub const INPUT_FILE: &str = DEFAULT_INPUT_FILE;
pub const OUTPUT_DIR: &str = ".";

pub const REPETITIONS: usize = DEFAULT_REPETITIONS;
// Runaway guard only; real trajectories resolve long before this
pub const GENERATION_CAP: u64 = DEFAULT_GENERATION_CAP;

pub const UNDEFINED_POLICY: UndefinedPolicy = UndefinedPolicy::Exclude;
