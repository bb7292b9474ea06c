use allelefix_sim::storage::{load_parameter_table, InputStatus};
use anyhow::{Context, Result};
use std::path::Path;

use crate::printing::{print_banner, print_parameter_sets, print_row_errors};

pub fn validate_input(input: &Path) -> Result<()> {
    print_banner("Validating Parameters");
    println!("🔍 Checking {}", input.display());

    let status = load_parameter_table(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    match status {
        InputStatus::Ready(parameter_sets) => {
            print_parameter_sets(&parameter_sets);
            println!("\n✓ Validation complete: {} parameter set(s) OK", parameter_sets.len());
        }
        InputStatus::Healed(reason) => {
            println!("⚠️  {}", reason.instruction(input));
        }
        InputStatus::Invalid(errors) => {
            print_row_errors(input, &errors);
        }
    }

    Ok(())
}
