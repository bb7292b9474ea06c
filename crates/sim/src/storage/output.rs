//! Result tables.
//!
//! Two semicolon-separated tables are produced: one row per job, appended
//! across runs, and one row per parameter set averaged over its repetitions,
//! rewritten on every run.

use crate::errors::StorageError;
use crate::simulation::{AggregateRecord, JobResult};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default file name of the per-job table.
pub const RESULTS_FILE: &str = "results_data.txt";

/// Default file name of the averaged table.
pub const AGGREGATE_RESULTS_FILE: &str = "results_data_avg.txt";

/// Header of the per-job table.
pub const RESULTS_HEADER: &str = "Simul Nr;Rep;Pop size;Select coeff;Attempts;Prob allele loss;Prob allele fix;St. dev. allele fix;Aver gen to fix;St. dev. gen to fix";

/// Header of the averaged table.
pub const AGGREGATE_RESULTS_HEADER: &str = "Reps;SimulationNr;Pop size (N);Select coeff;Attempts;Prob allele loss;Prob of allele fix;St. dev. allele fix;Aver gen to fix;St. dev. gen to fix";

/// Text written for an undefined statistic.
pub const MISSING_VALUE: &str = "nan";

/// How the per-job table was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableWrite {
    /// A new file was created with a header.
    Created,
    /// Rows were appended to an existing file.
    Appended,
}

/// Outcome of writing the averaged table.
#[derive(Debug)]
pub enum AggregateWrite {
    Written(PathBuf),
    /// The previous file could not be removed, so this run's averages were
    /// not written.
    Skipped { path: PathBuf, reason: String },
}

/// Format a selection coefficient the way it is usually typed (`0.0`, `0.001`).
pub fn format_coefficient(s: f64) -> String {
    if s.is_finite() && s == s.trunc() {
        format!("{s:.1}")
    } else {
        format!("{s}")
    }
}

fn format_generations(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => MISSING_VALUE.to_string(),
    }
}

/// One line of the per-job table.
pub fn format_job_row(result: &JobResult) -> String {
    let job = &result.job;
    let stats = &result.statistics;
    format!(
        "{};{};{};{};{};{:.8};{:.8};{:.10};{};{}",
        job.parameter_set_index,
        job.repetition,
        job.population_size,
        format_coefficient(job.selection_coefficient),
        job.attempts,
        stats.loss_probability,
        stats.fixation_probability,
        stats.fixation_probability_stderr,
        format_generations(stats.mean_generations_to_fixation),
        format_generations(stats.stddev_generations_to_fixation),
    )
}

/// One line of the averaged table, prefixed with the repetition count.
pub fn format_aggregate_row(record: &AggregateRecord) -> String {
    format!(
        "{};{};{};{};{};{:.8};{:.8};{:.10};{};{}",
        record.repetitions,
        record.parameter_set_index,
        record.population_size,
        format_coefficient(record.selection_coefficient),
        record.attempts,
        record.loss_probability,
        record.fixation_probability,
        record.fixation_probability_stderr,
        format_generations(record.mean_generations_to_fixation),
        format_generations(record.stddev_generations_to_fixation),
    )
}

fn write_lines<W: Write>(
    writer: &mut W,
    lines: impl IntoIterator<Item = String>,
) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Append job rows to `path`, creating it with a header if absent.
///
/// An existing file is never re-headed, even if its header differs.
pub fn write_job_results(path: &Path, results: &[JobResult]) -> Result<TableWrite, StorageError> {
    let mode = if path.exists() {
        TableWrite::Appended
    } else {
        TableWrite::Created
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StorageError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    let header = (mode == TableWrite::Created).then(|| RESULTS_HEADER.to_string());
    let rows = results.iter().map(format_job_row);
    write_lines(&mut writer, header.into_iter().chain(rows))
        .map_err(|e| StorageError::write(path, e))?;

    log::debug!("Wrote {} job rows to {} ({mode:?})", results.len(), path.display());
    Ok(mode)
}

/// Replace `path` with a fresh averaged table.
///
/// Failing to remove a previous file is not an error: the table is skipped
/// and the reason returned so the per-job results can still be kept.
pub fn write_aggregate_results(
    path: &Path,
    records: &[AggregateRecord],
) -> Result<AggregateWrite, StorageError> {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("Could not delete {}: {e}", path.display());
            return Ok(AggregateWrite::Skipped {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    }

    let file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .map_err(|e| StorageError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    let header = std::iter::once(AGGREGATE_RESULTS_HEADER.to_string());
    let rows = records.iter().map(format_aggregate_row);
    write_lines(&mut writer, header.chain(rows)).map_err(|e| StorageError::write(path, e))?;

    Ok(AggregateWrite::Written(path.to_path_buf()))
}
