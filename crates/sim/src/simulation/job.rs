//! Job planning.
//!
//! A job is one (parameter set, repetition) pair. Every job carries its own
//! seed, drawn in job-list order from a master generator, so a seeded batch
//! reproduces exactly no matter which worker picks up which job.

use crate::base::ParameterSet;
use crate::simulation::RunConfig;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// One unit of work for the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Index of the parameter set (1-based)
    pub parameter_set_index: usize,
    /// Repetition number (1-based)
    pub repetition: usize,
    /// Diploid population size (N)
    pub population_size: u64,
    /// Selection coefficient (s)
    pub selection_coefficient: f64,
    /// Starting allele frequency, 100 / 2N
    pub initial_frequency: f64,
    /// Runaway guard for each trial
    pub generation_cap: u64,
    /// Trials to run
    pub attempts: u64,
    /// Seed of this job's random stream
    pub seed: u64,
}

impl Job {
    /// Build the job for one repetition of a parameter set.
    pub fn new(params: &ParameterSet, repetition: usize, generation_cap: u64, seed: u64) -> Self {
        Self {
            parameter_set_index: params.index,
            repetition,
            population_size: params.population_size,
            selection_coefficient: params.selection_coefficient,
            initial_frequency: params.initial_frequency(),
            generation_cap,
            attempts: params.attempts,
            seed,
        }
    }

    /// Sort key giving the deterministic report order.
    pub fn key(&self) -> (usize, usize) {
        (self.parameter_set_index, self.repetition)
    }
}

/// Enumerate every (parameter set, repetition) job in report order.
pub fn plan_jobs(parameter_sets: &[ParameterSet], config: &RunConfig) -> Vec<Job> {
    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    };

    let mut jobs = Vec::with_capacity(parameter_sets.len() * config.repetitions);
    for params in parameter_sets {
        for repetition in 1..=config.repetitions {
            jobs.push(Job::new(params, repetition, config.generation_cap, rng.random()));
        }
    }
    log::debug!(
        "Planned {} jobs for {} parameter sets",
        jobs.len(),
        parameter_sets.len()
    );
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn params() -> Vec<ParameterSet> {
        vec![
            ParameterSet::new(1, 1000, 0.001, 50),
            ParameterSet::new(2, 10_000, 0.005, 20),
        ]
    }

    #[test]
    fn test_plan_order_and_count() {
        let config = RunConfig::new(3, 1000, Some(1));
        let jobs = plan_jobs(&params(), &config);

        let keys: Vec<_> = jobs.iter().map(Job::key).collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_jobs_copy_parameter_set() {
        let config = RunConfig::new(2, 1000, Some(1));
        let jobs = plan_jobs(&params(), &config);

        for job in jobs.iter().filter(|j| j.parameter_set_index == 2) {
            assert_eq!(job.population_size, 10_000);
            assert_eq!(job.selection_coefficient, 0.005);
            assert_eq!(job.attempts, 20);
            assert_eq!(job.generation_cap, 1000);
            assert!((job.initial_frequency - 0.005).abs() < 1e-15);
        }
    }

    #[test]
    fn test_seeded_plan_is_reproducible() {
        let config = RunConfig::new(4, 1000, Some(99));
        assert_eq!(plan_jobs(&params(), &config), plan_jobs(&params(), &config));
    }

    #[test]
    fn test_job_seeds_are_distinct() {
        let config = RunConfig::new(20, 1000, Some(5));
        let jobs = plan_jobs(&params(), &config);
        let seeds: HashSet<u64> = jobs.iter().map(|j| j.seed).collect();
        assert_eq!(seeds.len(), jobs.len());
    }

    #[test]
    fn test_unseeded_plans_differ() {
        let config = RunConfig::new(2, 1000, None);
        let a: Vec<u64> = plan_jobs(&params(), &config).iter().map(|j| j.seed).collect();
        let b: Vec<u64> = plan_jobs(&params(), &config).iter().map(|j| j.seed).collect();
        assert_ne!(a, b);
    }
}
