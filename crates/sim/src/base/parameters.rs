//! Validated simulation parameters.
//!
//! A [`ParameterSet`] is one row of the parameter table after validation. The
//! simulation core trusts these values and never re-validates them.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Largest population size or attempt count accepted from the parameter table.
pub const MAX_COUNT: u64 = 1_000_000_000_000;

/// Accepted range of diploid population sizes.
pub const POPULATION_SIZE_RANGE: RangeInclusive<u64> = 1..=MAX_COUNT;

/// Accepted range of selection coefficients.
pub const SELECTION_RANGE: RangeInclusive<f64> = -2.0..=2.0;

/// Accepted range of trials per job.
pub const ATTEMPTS_RANGE: RangeInclusive<u64> = 1..=MAX_COUNT;

/// Number of copies of the new allele present at generation zero.
pub const INITIAL_ALLELE_COPIES: f64 = 100.0;

/// One validated (N, s, attempts) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// 1-based position in the input table
    pub index: usize,
    /// Number of diploid individuals (N)
    pub population_size: u64,
    /// Selection coefficient of the new allele (s)
    pub selection_coefficient: f64,
    /// Independent trials per repetition
    pub attempts: u64,
}

impl ParameterSet {
    pub fn new(
        index: usize,
        population_size: u64,
        selection_coefficient: f64,
        attempts: u64,
    ) -> Self {
        Self {
            index,
            population_size,
            selection_coefficient,
            attempts,
        }
    }

    /// Number of gene copies in the diploid population (2N).
    pub fn gene_copies(&self) -> u64 {
        2 * self.population_size
    }

    /// Initial frequency of the new allele: 100 copies among 2N.
    pub fn initial_frequency(&self) -> f64 {
        INITIAL_ALLELE_COPIES / self.gene_copies() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_frequency() {
        let params = ParameterSet::new(1, 1000, 0.0, 10);
        assert_eq!(params.gene_copies(), 2000);
        assert!((params.initial_frequency() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_ranges() {
        assert!(POPULATION_SIZE_RANGE.contains(&MAX_COUNT));
        assert!(!POPULATION_SIZE_RANGE.contains(&0));
        assert!(SELECTION_RANGE.contains(&-2.0));
        assert!(!SELECTION_RANGE.contains(&2.0001));
        assert!(!SELECTION_RANGE.contains(&f64::NAN));
    }
}
