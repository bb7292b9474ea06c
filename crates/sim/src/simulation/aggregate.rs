//! Per-parameter-set averages across repetitions.

use serde::{Deserialize, Serialize};

/// Mean of the per-repetition statistics of one parameter set.
///
/// Built from already-summarised repetitions, never from raw trial outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Index of the parameter set (1-based)
    pub parameter_set_index: usize,
    pub population_size: u64,
    pub selection_coefficient: f64,
    pub attempts: u64,
    /// Repetitions averaged
    pub repetitions: usize,
    /// Repetitions whose generation statistics were defined
    pub defined_generation_repetitions: usize,
    pub loss_probability: f64,
    pub fixation_probability: f64,
    pub fixation_probability_stderr: f64,
    pub mean_generations_to_fixation: Option<f64>,
    pub stddev_generations_to_fixation: Option<f64>,
}
