//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use allelefix_sim::prelude::*;
//!
//! let params = ParameterSet::new(1, 1000, 0.0, 10);
//! let jobs = plan_jobs(&[params], &RunConfig::new(2, 1_000_000, Some(42)));
//! let results = Dispatcher::new(Some(2)).unwrap().dispatch(jobs).unwrap();
//! assert_eq!(results.len(), 2);
//! ```

pub use crate::base::{ParameterSet, Probability};
pub use crate::errors::{SimulationError, StorageError};
pub use crate::evolution::{BinomialDrift, SelectionModel};
pub use crate::simulation::{
    evaluate, plan_jobs, run_trial, AggregateRecord, Dispatcher, Job, JobResult, RunConfig,
    RunStatistics, TrialOutcome, UndefinedPolicy,
};
