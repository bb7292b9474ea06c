//! Run configuration.
//!
//! These values are fixed for a whole batch and are never part of the
//! parameter table.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of repetitions of each parameter set.
pub const DEFAULT_REPETITIONS: usize = 20;

/// Default runaway guard on the number of generations of a single trial.
pub const DEFAULT_GENERATION_CAP: u64 = 100_000_000_000;

/// How aggregation treats repetitions whose generation statistics are
/// undefined because none of their trials fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// Average only the repetitions that define the statistic. The aggregate
    /// is undefined only when no repetition defines it.
    #[default]
    Exclude,
    /// The aggregate is undefined as soon as one repetition is undefined.
    Propagate,
}

impl fmt::Display for UndefinedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude => write!(f, "exclude"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

impl FromStr for UndefinedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exclude" => Ok(Self::Exclude),
            "propagate" => Ok(Self::Propagate),
            _ => Err(format!(
                "Unknown undefined-value policy: {s}. Available: exclude, propagate"
            )),
        }
    }
}

/// Batch-wide simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Repetitions of every parameter set
    pub repetitions: usize,
    /// Runaway guard for a single trajectory
    pub generation_cap: u64,
    /// Master seed; job seeds are derived from it. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Worker count; `None` uses every logical CPU
    pub threads: Option<usize>,
    /// Aggregation of undefined generation statistics
    #[serde(default)]
    pub undefined_policy: UndefinedPolicy,
}

impl RunConfig {
    pub fn new(repetitions: usize, generation_cap: u64, seed: Option<u64>) -> Self {
        Self {
            repetitions,
            generation_cap,
            seed,
            threads: None,
            undefined_policy: UndefinedPolicy::default(),
        }
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_undefined_policy(mut self, policy: UndefinedPolicy) -> Self {
        self.undefined_policy = policy;
        self
    }

    /// Fix the master seed, drawing one from entropy if none was given, so
    /// the run can be reported and replayed.
    pub fn with_resolved_seed(mut self) -> Self {
        self.seed.get_or_insert_with(|| rand::rng().random());
        self
    }

    /// Whether the aggregate table is meaningful for this run.
    pub fn produces_aggregates(&self) -> bool {
        self.repetitions > 1
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS, DEFAULT_GENERATION_CAP, None)
    }
}
