//! Runs the compiled binary on the shipped scenario files and on small CSV tables.

mod common;

use std::fs;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uk-power-balance"))
        .args(args)
        .output()
        .expect("uk-power-balance process should run")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

fn assert_feasible_decade(stdout: &str) {
    assert!(stdout.contains("--- Summary (3650 days) ---"), "{stdout}");
    assert!(stdout.contains("--- Yearly cost (GBP bn) ---"), "{stdout}");
    assert!(!stdout.contains("infeasible on day"), "{stdout}");
}

#[test]
fn scenario_files_match_their_presets() {
    for name in ["baseline", "medium_storage", "dac_opportunistic"] {
        let path = format!("scenarios/{name}.toml");
        let from_file = stdout_of(&["--scenario", &path]);
        let from_preset = stdout_of(&["--preset", name]);
        assert_feasible_decade(&from_file);
        assert_eq!(from_file, from_preset, "{path} drifted from the {name} preset");
    }
}

#[test]
fn presets_produce_distinct_reports() {
    let baseline = stdout_of(&["--preset", "baseline"]);
    let opportunistic = stdout_of(&["--preset", "dac_opportunistic"]);
    assert_ne!(baseline, opportunistic);
}

#[test]
fn feasible_report_lists_costs() {
    let csv = common::write_temp_file("feasible.csv", "date,250\n0,1.0\n1,-0.5\n2,0.2\n");
    let stdout = stdout_of(&["--net-supply", csv.to_str().unwrap()]);
    assert!(stdout.contains("--- Summary (3 days) ---"), "{stdout}");
    assert!(stdout.contains("--- Yearly cost (GBP bn) ---"), "{stdout}");
    assert!(stdout.contains("GBP/MWh"), "{stdout}");
}

#[test]
fn infeasible_scenario_exits_cleanly() {
    let csv = common::write_temp_file("infeasible.csv", "250\n1.0\n-5.0\n-500.0\n");
    let stdout = stdout_of(&["--preset", "baseline", "--net-supply", csv.to_str().unwrap()]);
    assert!(stdout.contains("infeasible on day 2"), "{stdout}");
    assert!(!stdout.contains("--- Summary"));
}

#[test]
fn results_export_writes_one_row_per_day() {
    let csv = common::write_temp_file("export-in.csv", "250\n1.0\n-0.5\n0.2\n");
    let out = std::env::temp_dir().join(format!(
        "uk-power-balance-{}-export-out.csv",
        std::process::id()
    ));
    stdout_of(&[
        "--net-supply",
        csv.to_str().unwrap(),
        "--results-out",
        out.to_str().unwrap(),
        "--print-days",
    ]);

    let written = fs::read_to_string(&out).expect("results file exists");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("day,net_supply_twh,"));
    assert!(lines[1].starts_with("0,1.000000,"));
}

#[test]
fn days_override_shortens_the_run() {
    let stdout = stdout_of(&["--preset", "baseline", "--days", "30", "--seed", "7"]);
    assert!(stdout.contains("--- Summary (30 days) ---"), "{stdout}");
}

#[test]
fn invalid_scenario_lists_every_bad_field() {
    let toml = common::write_temp_file(
        "invalid.toml",
        "[system]\nhydrogen_discharge_efficiency = 1.5\ndac_power_gw = -1.0\n",
    );
    let output = run_cli(&["--scenario", toml.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("system.hydrogen_discharge_efficiency"), "{stderr}");
    assert!(stderr.contains("system.dac_power_gw"), "{stderr}");
}

#[test]
fn unknown_preset_and_unknown_field_are_rejected() {
    assert!(!run_cli(&["--preset", "nope"]).status.success());

    let toml = common::write_temp_file("unknown.toml", "[system]\nwind_gw = 10.0\n");
    assert!(!run_cli(&["--scenario", toml.to_str().unwrap()]).status.success());
}

#[test]
fn scenario_and_preset_are_mutually_exclusive() {
    let output = run_cli(&["--scenario", "scenarios/baseline.toml", "--preset", "baseline"]);
    assert!(!output.status.success());
}
