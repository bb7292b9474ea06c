//! Parallel execution of jobs.
//!
//! Jobs share no state. Each one is evaluated on a worker of a dedicated
//! rayon pool with its own seeded generator, and the batch returns only once
//! every job has finished. The order of the returned results is not part of
//! the contract; callers sort them before reporting.

use crate::errors::SimulationError;
use crate::simulation::{evaluate, Job, JobResult};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Observer notified as jobs complete, from whichever worker ran them.
pub trait JobObserver: Sync {
    fn job_finished(&self, result: &JobResult);
}

impl JobObserver for ProgressBar {
    fn job_finished(&self, _result: &JobResult) {
        self.inc(1);
    }
}

/// Runs batches of jobs on a fixed-size worker pool.
pub struct Dispatcher {
    pool: ThreadPool,
}

impl Dispatcher {
    /// Create a dispatcher with `threads` workers, or one per logical CPU.
    pub fn new(threads: Option<usize>) -> Result<Self, SimulationError> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|i| format!("allelefix-worker-{i}"));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Evaluate every job and collect the results.
    ///
    /// Fails as a whole if any job fails; no partial results are returned.
    pub fn dispatch(&self, jobs: Vec<Job>) -> Result<Vec<JobResult>, SimulationError> {
        self.run(jobs, None)
    }

    /// Like [`Dispatcher::dispatch`], notifying `observer` after each job.
    pub fn dispatch_observed(
        &self,
        jobs: Vec<Job>,
        observer: &dyn JobObserver,
    ) -> Result<Vec<JobResult>, SimulationError> {
        self.run(jobs, Some(observer))
    }

    fn run(
        &self,
        jobs: Vec<Job>,
        observer: Option<&dyn JobObserver>,
    ) -> Result<Vec<JobResult>, SimulationError> {
        let count = jobs.len();
        log::info!("Dispatching {count} jobs on {} workers", self.workers());

        let results = self.pool.install(|| {
            jobs.into_par_iter()
                .map(|job| {
                    let statistics =
                        evaluate(&job).map_err(|source| SimulationError::JobFailed {
                            parameter_set: job.parameter_set_index,
                            repetition: job.repetition,
                            source: Box::new(source),
                        })?;
                    let result = JobResult { job, statistics };
                    if let Some(observer) = observer {
                        observer.job_finished(&result);
                    }
                    Ok(result)
                })
                .collect::<Result<Vec<_>, SimulationError>>()
        })?;

        log::info!("Finished {count} jobs");
        Ok(results)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("workers", &self.workers())
            .finish()
    }
}
