//! Selection on a single bi-allelic locus.
//!
//! The new allele `A` is present at frequency `p` among the 2N gene copies of
//! the parental generation. Under random mating the diploid genotypes occur at
//! Hardy-Weinberg proportions:
//!
//! - `AA` homozygotes with frequency `p²`, transmitting `A` with certainty
//! - `Aa` heterozygotes with frequency `2p(1 − p)`, transmitting `A` half the time
//!
//! so a gene copy drawn from the parents carries `A` with the inheritance
//! probability `q = p² + ½·2p(1 − p)`.
//!
//! Selection then weights carriers of `A` by `1 + s` relative to the resident
//! allele. Normalising by the mean fitness gives the transmission probability
//!
//! ```text
//! fit = (1 + s)·q / (1 + s·q)
//! ```
//!
//! which is the success probability of the binomial draw that forms the next
//! generation (see [`crate::evolution::drift`]).

use crate::base::Probability;
use serde::{Deserialize, Serialize};

/// Genic selection with coefficient `s` on the new allele.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionModel {
    coefficient: f64,
}

impl SelectionModel {
    /// Create a selection model with coefficient `s`.
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Selection-free model (pure drift).
    pub fn neutral() -> Self {
        Self::new(0.0)
    }

    /// Probability that a gene copy drawn from the parents carries the allele,
    /// before selection acts.
    pub fn inheritance_probability(frequency: f64) -> f64 {
        let homozygous = frequency * frequency;
        let heterozygous = 2.0 * frequency * (1.0 - frequency);
        homozygous + 0.5 * heterozygous
    }

    /// Probability that a gene copy of the next generation carries the allele.
    ///
    /// Carriers with fitness `1 + s <= 0` leave no offspring, so the allele
    /// is not transmitted. A non-positive mean fitness `1 + s·q` is treated
    /// the same way instead of letting the sign flip through the ratio.
    pub fn transmission_probability(&self, frequency: f64) -> Probability {
        let q = Self::inheritance_probability(frequency);
        let s = self.coefficient;
        let mean_fitness = 1.0 + s * q;
        if 1.0 + s <= 0.0 || mean_fitness <= 0.0 {
            return Probability::ZERO;
        }
        Probability::new(((1.0 + s) * q) / mean_fitness)
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::neutral()
    }
}
