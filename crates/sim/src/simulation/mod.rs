//! Simulation engine.
//!
//! - `trial`: one allele trajectory to loss, fixation or the generation cap
//! - `evaluator`: many trials of one job reduced to `RunStatistics`
//! - `job`: enumeration of (parameter set, repetition) jobs with their seeds
//! - `dispatcher`: parallel execution of a job batch

pub mod aggregate;
pub mod configs;
pub mod dispatcher;
pub mod evaluator;
pub mod job;
pub mod trial;

pub use aggregate::AggregateRecord;
pub use configs::{RunConfig, UndefinedPolicy, DEFAULT_GENERATION_CAP, DEFAULT_REPETITIONS};
pub use dispatcher::{Dispatcher, JobObserver};
pub use evaluator::{evaluate, JobResult, OutcomeTally, RunStatistics};
pub use job::{plan_jobs, Job};
pub use trial::{run_trial, Trial, TrialOutcome};
