//! Deterministic reassembly of dispatcher results.
//!
//! The dispatcher returns results in whatever order the workers finished.
//! Reassembly sorts them by (parameter set, repetition) and averages the
//! repetitions of each parameter set into an [`AggregateRecord`].

use super::utils::{mean, mean_of_defined};
use allelefix_sim::simulation::{AggregateRecord, JobResult, UndefinedPolicy};
use serde::{Deserialize, Serialize};

/// Both output streams of a batch, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reassembly {
    /// Per-job results sorted by (parameter set, repetition)
    pub runs: Vec<JobResult>,
    /// One record per parameter set, ascending by index
    pub aggregates: Vec<AggregateRecord>,
}

/// Sort results into ascending (parameter set, repetition) order.
pub fn sort_results(mut results: Vec<JobResult>) -> Vec<JobResult> {
    results.sort_by_key(|r| r.job.key());
    results
}

/// Average one parameter set's repetitions.
///
/// `group` must be non-empty and share a parameter set index.
fn aggregate_group(group: &[JobResult], policy: UndefinedPolicy) -> Option<AggregateRecord> {
    let first = group.first()?;
    let field = |f: fn(&JobResult) -> f64| mean(&group.iter().map(f).collect::<Vec<_>>());

    let means: Vec<Option<f64>> = group
        .iter()
        .map(|r| r.statistics.mean_generations_to_fixation)
        .collect();
    let stddevs: Vec<Option<f64>> = group
        .iter()
        .map(|r| r.statistics.stddev_generations_to_fixation)
        .collect();
    let (mean_generations, defined) = mean_of_defined(&means, policy);
    let (stddev_generations, _) = mean_of_defined(&stddevs, policy);

    Some(AggregateRecord {
        parameter_set_index: first.job.parameter_set_index,
        population_size: first.job.population_size,
        selection_coefficient: first.job.selection_coefficient,
        attempts: first.job.attempts,
        repetitions: group.len(),
        defined_generation_repetitions: defined,
        loss_probability: field(|r| r.statistics.loss_probability)?,
        fixation_probability: field(|r| r.statistics.fixation_probability)?,
        fixation_probability_stderr: field(|r| r.statistics.fixation_probability_stderr)?,
        mean_generations_to_fixation: mean_generations,
        stddev_generations_to_fixation: stddev_generations,
    })
}

/// Average the repetitions of every parameter set.
///
/// `sorted` must already be in report order; records come out ascending by
/// parameter set index.
pub fn aggregate(sorted: &[JobResult], policy: UndefinedPolicy) -> Vec<AggregateRecord> {
    sorted
        .chunk_by(|a, b| a.job.parameter_set_index == b.job.parameter_set_index)
        .filter_map(|group| aggregate_group(group, policy))
        .collect()
}

/// Sort results and compute the per-parameter-set averages.
pub fn reassemble(results: Vec<JobResult>, policy: UndefinedPolicy) -> Reassembly {
    let runs = sort_results(results);
    let aggregates = aggregate(&runs, policy);
    log::debug!(
        "Reassembled {} runs into {} aggregates",
        runs.len(),
        aggregates.len()
    );
    Reassembly { runs, aggregates }
}
