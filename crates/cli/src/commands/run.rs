use allelefix_analysis::{reassemble, Reassembly};
use allelefix_sim::simulation::{plan_jobs, Dispatcher, RunConfig};
use allelefix_sim::storage::{
    load_parameter_table, write_aggregate_results, write_job_results, AggregateWrite,
    InputStatus, TableWrite, AGGREGATE_RESULTS_FILE, RESULTS_FILE,
};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::args::RunArgs;
use crate::printing::{print_banner, print_parameter_sets, print_row_errors, print_run_parameters};

#[derive(Serialize)]
struct RunSummary<'a> {
    config: &'a RunConfig,
    #[serde(flatten)]
    report: &'a Reassembly,
}

pub fn run_simulation(args: &RunArgs, threads: Option<usize>) -> Result<()> {
    let started = Instant::now();
    print_banner("Allele Fixation Simulation");

    let status = load_parameter_table(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let parameter_sets = match status {
        InputStatus::Ready(parameter_sets) => parameter_sets,
        InputStatus::Healed(reason) => {
            println!("⚠️  {}", reason.instruction(&args.input));
            return Ok(());
        }
        InputStatus::Invalid(errors) => {
            print_row_errors(&args.input, &errors);
            return Ok(());
        }
    };
    print_parameter_sets(&parameter_sets);

    let config = args.run_config(threads);
    let dispatcher = Dispatcher::new(config.threads).context("Failed to start worker pool")?;
    print_run_parameters(&config, dispatcher.workers());

    let jobs = plan_jobs(&parameter_sets, &config);
    println!("🚀 Running {} jobs...", jobs.len());

    let results = if args.no_progress {
        dispatcher.dispatch(jobs)?
    } else {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} jobs ({eta})",
                )?
                .progress_chars("#>-"),
        );
        let results = dispatcher.dispatch_observed(jobs, &pb);
        pb.finish_and_clear();
        results?
    };

    let report = reassemble(results, config.undefined_policy);
    write_reports(&args.output_dir, &config, &report)?;

    if let Some(path) = &args.summary_json {
        let summary = RunSummary {
            config: &config,
            report: &report,
        };
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Summary written to {}", path.display());
    }

    println!(
        "\nExecution time required: {:.2} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn write_reports(output_dir: &Path, config: &RunConfig, report: &Reassembly) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let results_path = output_dir.join(RESULTS_FILE);
    match write_job_results(&results_path, &report.runs)? {
        TableWrite::Created => println!("✓ Created {}", results_path.display()),
        TableWrite::Appended => println!("✓ Appended to {}", results_path.display()),
    }

    if !config.produces_aggregates() {
        log::info!("Single repetition; no averaged table");
        return Ok(());
    }

    let aggregate_path = output_dir.join(AGGREGATE_RESULTS_FILE);
    match write_aggregate_results(&aggregate_path, &report.aggregates)? {
        AggregateWrite::Written(path) => println!("✓ Created {}", path.display()),
        AggregateWrite::Skipped { path, reason } => {
            println!(
                "⚠️  The file {} could not be deleted ({reason}); no averaged results written.",
                path.display()
            );
        }
    }
    Ok(())
}
