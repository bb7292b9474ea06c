//! Single allele trajectory.
//!
//! A trial follows the frequency of one new allele from its initial value
//! until it is lost, fixed, or the generation cap runs out.

use crate::errors::SimulationError;
use crate::evolution::{BinomialDrift, SelectionModel};
use crate::simulation::Job;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terminal state of one trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialOutcome {
    /// Every copy of the allele disappeared.
    Lost,
    /// The allele reached fixation at the given generation index.
    Fixed(u64),
    /// The generation cap was reached first.
    Unresolved,
}

/// A reusable trajectory simulator for one parameter combination.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    selection: SelectionModel,
    drift: BinomialDrift,
    fixation_threshold: f64,
    initial_frequency: f64,
    generation_cap: u64,
}

impl Trial {
    pub fn new(
        population_size: u64,
        selection_coefficient: f64,
        initial_frequency: f64,
        generation_cap: u64,
    ) -> Result<Self, SimulationError> {
        let drift = BinomialDrift::new(population_size)?;
        Ok(Self {
            selection: SelectionModel::new(selection_coefficient),
            fixation_threshold: drift.fixation_threshold(),
            drift,
            initial_frequency,
            generation_cap,
        })
    }

    /// Trial matching a job's parameters.
    pub fn for_job(job: &Job) -> Result<Self, SimulationError> {
        Self::new(
            job.population_size,
            job.selection_coefficient,
            job.initial_frequency,
            job.generation_cap,
        )
    }

    /// Frequency strictly above which the allele counts as fixed.
    pub fn fixation_threshold(&self) -> f64 {
        self.fixation_threshold
    }

    /// Simulate one trajectory.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialOutcome, SimulationError> {
        let mut frequency = self.initial_frequency;

        for generation in 0..self.generation_cap {
            if frequency == 0.0 {
                return Ok(TrialOutcome::Lost);
            }
            // Round-off can keep an exact 1.0 from ever appearing
            if frequency > self.fixation_threshold {
                return Ok(TrialOutcome::Fixed(generation));
            }

            let fit = self.selection.transmission_probability(frequency);
            frequency = self.drift.sample_frequency(fit, rng)?;
        }

        Ok(TrialOutcome::Unresolved)
    }
}

/// Simulate one trajectory of an allele starting at `initial_frequency` in a
/// population of `population_size` diploids under selection coefficient
/// `selection_coefficient`.
pub fn run_trial<R: Rng + ?Sized>(
    population_size: u64,
    selection_coefficient: f64,
    initial_frequency: f64,
    generation_cap: u64,
    rng: &mut R,
) -> Result<TrialOutcome, SimulationError> {
    Trial::new(
        population_size,
        selection_coefficient,
        initial_frequency,
        generation_cap,
    )?
    .run(rng)
}
