//! Evolutionary forces acting on the allele each generation.
//!
//! - **Selection**: weights carriers of the new allele by `1 + s`
//! - **Drift**: binomial resampling of the 2N gene copies

pub mod drift;
pub mod selection;

pub use drift::BinomialDrift;
pub use selection::SelectionModel;
