//! Post-processing of simulation results
//!
//! - Reassembly of unordered dispatcher output into report order
//! - Averaging of repetitions per parameter set

pub mod reassembly;
pub mod utils;

pub use reassembly::{aggregate, reassemble, sort_results, Reassembly};
