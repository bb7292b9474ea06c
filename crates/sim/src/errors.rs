//! Error types for the simulation crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or running simulation jobs.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The binomial sampler rejected its parameters.
    #[error("Binomial sampling failed for {copies} gene copies with p = {probability}: {reason}")]
    Sampling {
        copies: u64,
        probability: f64,
        reason: String,
    },

    /// A job was built from parameters that cannot describe a population.
    #[error("Invalid job parameter: {0}")]
    InvalidParameter(String),

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    /// A job failed; the whole batch is abandoned.
    #[error("Job {parameter_set}/{repetition} failed: {source}")]
    JobFailed {
        parameter_set: usize,
        repetition: usize,
        #[source]
        source: Box<SimulationError>,
    },
}

/// Errors raised while reading the parameter table or writing result tables.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// The reason a single row of the parameter table was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowErrorKind {
    #[error("expected 3 fields separated by ';', found {0}")]
    FieldCount(usize),

    #[error("population size must be an integer between 1 and 1000000000000 (found '{0}')")]
    PopulationSize(String),

    #[error("selection coefficient must be a number between -2 and 2 (found '{0}')")]
    SelectionCoefficient(String),

    #[error("attempts must be an integer between 1 and 1000000000000 (found '{0}')")]
    Attempts(String),
}

/// A rejected row together with its 1-based line number in the input file.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct RowError {
    pub line: usize,
    pub kind: RowErrorKind,
}
