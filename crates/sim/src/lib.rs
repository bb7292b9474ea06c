//! # Simulation Crate
//!
//! The `sim` crate provides the Monte-Carlo engine for allele fixation under
//! genetic drift and selection in a diploid Wright-Fisher population.
//! It includes modules for the validated parameters, the evolutionary forces
//! acting each generation, the trial/evaluation/dispatch pipeline, and the
//! parameter and result tables.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod simulation;
pub mod storage;
pub mod prelude;

pub use base::{ParameterSet, Probability};
