use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const HEADER: &str = "Population size (N);selection coeff (s);attempts";

fn allelefix() -> Command {
    Command::cargo_bin("allelefix").unwrap()
}

#[test]
fn test_first_run_writes_template() {
    let temp = tempdir().unwrap();

    allelefix()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter the parameters to run"));

    let contents = fs::read_to_string(temp.path().join("input_data.txt")).unwrap();
    assert!(contents.starts_with(HEADER));
    assert!(contents.contains("1000;0.001;5000"));
    assert!(!temp.path().join("results_data.txt").exists());
}

#[test]
fn test_header_only_table_is_healed() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n")).unwrap();

    allelefix()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter the parameters you want"));

    let contents = fs::read_to_string(&input).unwrap();
    assert!(contents.contains("10000;0.005;20000"));
}

#[test]
fn test_invalid_rows_are_reported_with_line_numbers() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n100;0.0;20\n0;0.1;5\n100;3.5;5\n")).unwrap();

    allelefix()
        .arg("run")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 3"))
        .stdout(predicate::str::contains("Line 4"))
        .stdout(predicate::str::contains("Please correct the data"));

    assert!(!temp.path().join("results_data.txt").exists());
}

#[test]
fn test_small_run_writes_both_tables() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n100;0.0;20\n60;0.5;10\n")).unwrap();

    allelefix()
        .args(["-t", "2", "run", "-r", "2", "--seed", "1", "--no-progress"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 4 jobs"))
        .stdout(predicate::str::contains("Execution time required"));

    let runs = fs::read_to_string(temp.path().join("results_data.txt")).unwrap();
    let lines: Vec<&str> = runs.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Simul Nr;Rep;"));
    assert!(lines[1].starts_with("1;1;100;0.0;20;"));
    assert!(lines[2].starts_with("1;2;100;0.0;20;"));
    assert!(lines[3].starts_with("2;1;60;0.5;10;"));
    assert!(lines[4].starts_with("2;2;60;0.5;10;"));

    let averages = fs::read_to_string(temp.path().join("results_data_avg.txt")).unwrap();
    let lines: Vec<&str> = averages.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Reps;SimulationNr;"));
    assert!(lines[1].starts_with("2;1;100;0.0;20;"));
    assert!(lines[2].starts_with("2;2;60;0.5;10;"));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n200;0.05;50\n")).unwrap();

    for dir in ["a", "b"] {
        allelefix()
            .args(["run", "-r", "3", "--seed", "99", "--no-progress"])
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(temp.path().join(dir))
            .assert()
            .success();
    }

    for file in ["results_data.txt", "results_data_avg.txt"] {
        let a = fs::read_to_string(temp.path().join("a").join(file)).unwrap();
        let b = fs::read_to_string(temp.path().join("b").join(file)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_single_repetition_skips_averages() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n100;0.0;20\n")).unwrap();

    allelefix()
        .args(["run", "-r", "1", "--seed", "7", "--no-progress"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("results_data.txt").exists());
    assert!(!temp.path().join("results_data_avg.txt").exists());
}

#[test]
fn test_results_are_appended_across_runs() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    fs::write(&input, format!("{HEADER}\n100;0.0;20\n")).unwrap();

    for _ in 0..2 {
        allelefix()
            .args(["run", "-r", "2", "--no-progress"])
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(temp.path())
            .assert()
            .success();
    }

    let runs = fs::read_to_string(temp.path().join("results_data.txt")).unwrap();
    assert_eq!(runs.lines().count(), 5);
    assert_eq!(runs.lines().filter(|l| l.starts_with("Simul Nr")).count(), 1);

    let averages = fs::read_to_string(temp.path().join("results_data_avg.txt")).unwrap();
    assert_eq!(averages.lines().count(), 2);
}

#[test]
fn test_summary_json() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");
    let summary = temp.path().join("summary.json");
    fs::write(&input, format!("{HEADER}\n100;0.0;20\n")).unwrap();

    allelefix()
        .args(["run", "-r", "2", "--seed", "3", "--no-progress"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp.path())
        .arg("--summary-json")
        .arg(&summary)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["config"]["seed"], 3);
    assert_eq!(json["runs"].as_array().unwrap().len(), 2);
    assert_eq!(json["aggregates"].as_array().unwrap().len(), 1);
}

#[test]
fn test_zero_repetitions_rejected() {
    allelefix()
        .args(["run", "-r", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_init_and_validate() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("params.txt");

    allelefix()
        .arg("init")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    allelefix()
        .arg("init")
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    allelefix()
        .arg("init")
        .arg("-i")
        .arg(&input)
        .arg("--force")
        .assert()
        .success();

    allelefix()
        .arg("validate")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 parameter set(s) OK"))
        .stdout(predicate::str::contains("N = 10000 [s = 0.005] × 20000 attempts"));
}
