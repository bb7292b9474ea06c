//! Utility functions for analysis module
//!
//! Shared helper functions used across analysis submodules.

use allelefix_sim::simulation::UndefinedPolicy;

/// Calculate mean of a slice; `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of values that may be undefined.
///
/// Returns the mean under `policy` together with the number of defined
/// values that went into it.
pub fn mean_of_defined(values: &[Option<f64>], policy: UndefinedPolicy) -> (Option<f64>, usize) {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    let count = defined.len();

    let mean = match policy {
        UndefinedPolicy::Propagate if count < values.len() => None,
        _ => mean(&defined),
    };
    (mean, count)
}
