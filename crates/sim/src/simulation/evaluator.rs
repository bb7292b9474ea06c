//! Reduction of many trials into one statistics record.
//!
//! Outcomes are tallied locally per job and folded into an immutable
//! [`RunStatistics`]; nothing is shared between jobs.

use crate::errors::SimulationError;
use crate::simulation::{Job, Trial, TrialOutcome};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Running counts of trial outcomes.
///
/// Generation sums are kept as exact integers so the variance is not
/// degraded by accumulation error at large attempt counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    losses: u64,
    fixations: u64,
    unresolved: u64,
    generation_sum: u128,
    generation_sum_sq: u128,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one outcome to the tally.
    pub fn record(&mut self, outcome: TrialOutcome) {
        match outcome {
            TrialOutcome::Lost => self.losses += 1,
            TrialOutcome::Fixed(generation) => {
                let generation = u128::from(generation);
                self.fixations += 1;
                self.generation_sum += generation;
                self.generation_sum_sq += generation * generation;
            }
            TrialOutcome::Unresolved => self.unresolved += 1,
        }
    }

    /// Number of recorded outcomes.
    pub fn total(&self) -> u64 {
        self.losses + self.fixations + self.unresolved
    }

    /// Reduce the tally into summary statistics.
    ///
    /// Probabilities are relative to the number of recorded outcomes, so an
    /// empty tally yields zero probabilities.
    pub fn statistics(&self) -> RunStatistics {
        let attempts = self.total();
        let n = attempts.max(1) as f64;
        let loss_probability = self.losses as f64 / n;
        let fixation_probability = self.fixations as f64 / n;
        let fixation_probability_stderr =
            (fixation_probability * (1.0 - fixation_probability) / n).sqrt();

        let (mean, stddev) = if self.fixations > 0 {
            let fixed = self.fixations as f64;
            let mean = self.generation_sum as f64 / fixed;
            let variance = self.generation_sum_sq as f64 / fixed - mean * mean;
            (Some(mean), Some(variance.max(0.0).sqrt()))
        } else {
            (None, None)
        };

        RunStatistics {
            losses: self.losses,
            fixations: self.fixations,
            unresolved: self.unresolved,
            loss_probability,
            fixation_probability,
            fixation_probability_stderr,
            mean_generations_to_fixation: mean,
            stddev_generations_to_fixation: stddev,
        }
    }
}

/// Summary of all trials of one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Trials that lost the allele
    pub losses: u64,
    /// Trials that fixed the allele
    pub fixations: u64,
    /// Trials stopped by the generation cap
    pub unresolved: u64,
    pub loss_probability: f64,
    pub fixation_probability: f64,
    /// Binomial standard error of `fixation_probability`
    pub fixation_probability_stderr: f64,
    /// Mean fixation generation; `None` when no trial fixed
    pub mean_generations_to_fixation: Option<f64>,
    /// Population standard deviation of the fixation generation; `None` when
    /// no trial fixed
    pub stddev_generations_to_fixation: Option<f64>,
}

impl RunStatistics {
    /// Number of trials summarised.
    pub fn attempts(&self) -> u64 {
        self.losses + self.fixations + self.unresolved
    }

    /// Fraction of trials stopped by the generation cap.
    pub fn unresolved_probability(&self) -> f64 {
        1.0 - self.loss_probability - self.fixation_probability
    }
}

/// A job together with its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    pub job: Job,
    pub statistics: RunStatistics,
}

/// Run every trial of `job` and summarise the outcomes.
pub fn evaluate(job: &Job) -> Result<RunStatistics, SimulationError> {
    let trial = Trial::for_job(job)?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(job.seed);
    let mut tally = OutcomeTally::new();

    for _ in 0..job.attempts {
        tally.record(trial.run(&mut rng)?);
    }

    let statistics = tally.statistics();
    log::debug!(
        "Job {}/{}: {} lost, {} fixed, {} unresolved",
        job.parameter_set_index,
        job.repetition,
        statistics.losses,
        statistics.fixations,
        statistics.unresolved
    );
    Ok(statistics)
}
