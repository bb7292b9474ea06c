//! Parameter table input.
//!
//! The table is a semicolon-separated text file with a fixed header and one
//! `N;s;attempts` row per parameter set. A missing, empty or header-only file
//! (or one with the wrong header) is rewritten with example rows so the user
//! has a template to edit.

use crate::base::parameters::{ATTEMPTS_RANGE, POPULATION_SIZE_RANGE, SELECTION_RANGE};
use crate::base::ParameterSet;
use crate::errors::{RowError, RowErrorKind, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Required first line of the parameter table.
pub const INPUT_HEADER: &str = "Population size (N);selection coeff (s);attempts";

/// Rows written into a freshly created parameter table.
pub const EXAMPLE_ROWS: [&str; 2] = ["1000;0.001;5000", "10000;0.005;20000"];

/// Default file name of the parameter table.
pub const DEFAULT_INPUT_FILE: &str = "input_data.txt";

const FIELD_SEPARATOR: char = ';';

/// Why the parameter table was replaced by the example template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealReason {
    /// The file did not exist.
    Missing,
    /// The file had no non-blank lines.
    Empty,
    /// The first line was not the expected header.
    HeaderMismatch,
    /// The file held the header and nothing else.
    HeaderOnly,
}

impl HealReason {
    /// Instruction shown to the user after the template was written.
    pub fn instruction(&self, path: &Path) -> String {
        let verb = match self {
            Self::Missing | Self::Empty => "to run",
            Self::HeaderMismatch | Self::HeaderOnly => "you want",
        };
        format!(
            "Please enter the parameters {verb} in file {} (see example data), then rerun the program.",
            path.display()
        )
    }
}

/// Problem found while parsing the table text.
#[derive(Debug, Clone, PartialEq)]
pub enum TableProblem {
    /// The file shape is wrong; the template must be rewritten.
    Heal(HealReason),
    /// One or more data rows are invalid.
    Rows(Vec<RowError>),
}

/// Result of loading the parameter table from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum InputStatus {
    /// Every row validated.
    Ready(Vec<ParameterSet>),
    /// The template was written; nothing should run.
    Healed(HealReason),
    /// Some rows were rejected; nothing should run.
    Invalid(Vec<RowError>),
}

/// Parse the text of a parameter table.
///
/// Lines are trimmed and blank lines skipped. Every data row is checked and
/// all row errors are returned together, tagged with their 1-based line
/// number in the file.
pub fn parse_parameter_table(contents: &str) -> Result<Vec<ParameterSet>, TableProblem> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        None => return Err(TableProblem::Heal(HealReason::Empty)),
        Some((_, header)) if header != INPUT_HEADER => {
            return Err(TableProblem::Heal(HealReason::HeaderMismatch));
        }
        Some(_) => {}
    }

    let mut parameter_sets = Vec::new();
    let mut errors = Vec::new();
    let mut rows = 0;

    for (line, text) in lines {
        rows += 1;
        match parse_row(text) {
            Ok((population_size, selection_coefficient, attempts)) => {
                parameter_sets.push(ParameterSet::new(
                    parameter_sets.len() + 1,
                    population_size,
                    selection_coefficient,
                    attempts,
                ));
            }
            Err(kind) => errors.push(RowError { line, kind }),
        }
    }

    if rows == 0 {
        return Err(TableProblem::Heal(HealReason::HeaderOnly));
    }
    if !errors.is_empty() {
        return Err(TableProblem::Rows(errors));
    }
    Ok(parameter_sets)
}

/// Validate one `N;s;attempts` row.
pub fn parse_row(text: &str) -> Result<(u64, f64, u64), RowErrorKind> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [population, selection, attempts] = fields[..] else {
        return Err(RowErrorKind::FieldCount(fields.len()));
    };

    let population_size = population
        .parse::<u64>()
        .ok()
        .filter(|n| POPULATION_SIZE_RANGE.contains(n))
        .ok_or_else(|| RowErrorKind::PopulationSize(population.to_string()))?;

    let selection_coefficient = selection
        .parse::<f64>()
        .ok()
        .filter(|s| SELECTION_RANGE.contains(s))
        .ok_or_else(|| RowErrorKind::SelectionCoefficient(selection.to_string()))?;

    let attempts = attempts
        .parse::<u64>()
        .ok()
        .filter(|a| ATTEMPTS_RANGE.contains(a))
        .ok_or_else(|| RowErrorKind::Attempts(attempts.to_string()))?;

    Ok((population_size, selection_coefficient, attempts))
}

/// Write the header and example rows, replacing any existing file.
pub fn write_example_table(path: &Path) -> Result<(), StorageError> {
    let mut contents = String::from(INPUT_HEADER);
    contents.push('\n');
    for row in EXAMPLE_ROWS {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| StorageError::write(path, e))
}

/// Load and validate the parameter table at `path`.
///
/// Shape problems rewrite the file with the example template and report
/// [`InputStatus::Healed`]. Only I/O failures are errors.
pub fn load_parameter_table(path: &Path) -> Result<InputStatus, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            write_example_table(path)?;
            log::info!("Created parameter template at {}", path.display());
            return Ok(InputStatus::Healed(HealReason::Missing));
        }
        Err(e) => return Err(StorageError::read(path, e)),
    };

    match parse_parameter_table(&contents) {
        Ok(parameter_sets) => Ok(InputStatus::Ready(parameter_sets)),
        Err(TableProblem::Heal(reason)) => {
            write_example_table(path)?;
            log::info!("Rewrote parameter template at {} ({reason:?})", path.display());
            Ok(InputStatus::Healed(reason))
        }
        Err(TableProblem::Rows(errors)) => Ok(InputStatus::Invalid(errors)),
    }
}
