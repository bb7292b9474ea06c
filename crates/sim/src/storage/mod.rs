//! File input and output.
//!
//! - `input`: the parameter table, with template self-healing and row validation
//! - `output`: the per-job and averaged result tables

pub mod input;
pub mod output;

pub use input::{
    load_parameter_table, parse_parameter_table, write_example_table, HealReason, InputStatus,
    TableProblem, DEFAULT_INPUT_FILE, EXAMPLE_ROWS, INPUT_HEADER,
};
pub use output::{
    format_aggregate_row, format_job_row, write_aggregate_results, write_job_results,
    AggregateWrite, TableWrite, AGGREGATE_RESULTS_FILE, RESULTS_FILE,
};
