//! # Analysis Crate
//!
//! Turns the unordered results of a simulation batch into the two report
//! streams: per-job statistics in a deterministic order and per-parameter-set
//! averages.

pub mod analysis;

pub use analysis::{aggregate, reassemble, sort_results, Reassembly};
