//! Genetic drift by binomial resampling.
//!
//! Each generation the 2N gene copies of the offspring are drawn
//! independently from the parental gamete pool, so the number of copies
//! carrying the allele is `Binomial(2N, fit)`.

use crate::base::Probability;
use crate::errors::SimulationError;
use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Wright-Fisher resampling of a diploid population of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialDrift {
    gene_copies: u64,
}

impl BinomialDrift {
    /// Create a sampler for a population of `population_size` diploids.
    pub fn new(population_size: u64) -> Result<Self, SimulationError> {
        if population_size == 0 {
            return Err(SimulationError::InvalidParameter(
                "population size must be positive".into(),
            ));
        }
        let gene_copies = population_size.checked_mul(2).ok_or_else(|| {
            SimulationError::InvalidParameter(format!(
                "population size {population_size} overflows the gene copy count"
            ))
        })?;
        Ok(Self { gene_copies })
    }

    /// Number of gene copies (2N).
    pub fn gene_copies(&self) -> u64 {
        self.gene_copies
    }

    /// Lowest frequency that counts as fixation: `1 − 1/(2N)`.
    ///
    /// A frequency must be strictly above this value to be fixed.
    pub fn fixation_threshold(&self) -> f64 {
        1.0 - 1.0 / self.gene_copies as f64
    }

    /// Draw the allele copy count of the next generation.
    pub fn sample_copies<R: Rng + ?Sized>(
        &self,
        probability: Probability,
        rng: &mut R,
    ) -> Result<u64, SimulationError> {
        let binomial = Binomial::new(self.gene_copies, probability.get()).map_err(|e| {
            SimulationError::Sampling {
                copies: self.gene_copies,
                probability: probability.get(),
                reason: e.to_string(),
            }
        })?;
        Ok(binomial.sample(rng))
    }

    /// Draw the allele frequency of the next generation.
    pub fn sample_frequency<R: Rng + ?Sized>(
        &self,
        probability: Probability,
        rng: &mut R,
    ) -> Result<f64, SimulationError> {
        let copies = self.sample_copies(probability, rng)?;
        Ok(copies as f64 / self.gene_copies as f64)
    }
}
