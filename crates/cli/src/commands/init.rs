use allelefix_sim::storage::{write_example_table, EXAMPLE_ROWS, INPUT_HEADER};
use anyhow::{Context, Result};
use std::path::Path;

use crate::printing::print_banner;

pub fn init_input(input: &Path, force: bool) -> Result<()> {
    print_banner("Parameter Template");

    if input.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            input.display()
        );
    }

    write_example_table(input)
        .with_context(|| format!("Failed to write {}", input.display()))?;

    println!("✓ Wrote {}", input.display());
    println!("  {INPUT_HEADER}");
    for row in EXAMPLE_ROWS {
        println!("  {row}");
    }
    println!("\n💡 Edit the rows, then run 'allelefix run -i {}'", input.display());

    Ok(())
}
