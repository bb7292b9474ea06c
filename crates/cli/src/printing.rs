use allelefix_sim::base::ParameterSet;
use allelefix_sim::errors::RowError;
use allelefix_sim::simulation::RunConfig;
use allelefix_sim::storage::output::format_coefficient;
use std::path::Path;

pub fn print_banner(title: &str) {
    println!("🧬 Allelefix - {title}");
    println!("============================================\n");
}

pub fn print_parameter_sets(parameter_sets: &[ParameterSet]) {
    println!("\n📋 Parameter Sets");
    for params in parameter_sets {
        println!(
            "  {:>3}. N = {} [s = {}] × {} attempts (p0 = {:.6})",
            params.index,
            params.population_size,
            format_coefficient(params.selection_coefficient),
            params.attempts,
            params.initial_frequency(),
        );
    }
}

pub fn print_run_parameters(config: &RunConfig, workers: usize) {
    println!("\n⚙️  Run Configuration");
    println!("  • Workers: {workers} [-t, --threads]");
    println!("  • Repetitions: {} [-r, --repetitions]", config.repetitions);
    println!(
        "  • Generation Cap: {} [--generation-cap]",
        config.generation_cap
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    }
    println!(
        "  • Undefined Generation Stats: {} [--undefined-policy]",
        config.undefined_policy
    );
    println!();
}

pub fn print_row_errors(path: &Path, errors: &[RowError]) {
    println!("✗ The data in file {} is wrong:", path.display());
    for error in errors {
        println!("  • Line {}: {}", error.line, error.kind);
    }
    println!("\nPlease correct the data and rerun the program.");
}
