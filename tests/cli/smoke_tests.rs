// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn stair_ways() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stair_ways"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    stair_ways()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("sequence"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn count_prints_table() {
    stair_ways()
        .args(["count", "7", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21"))
        .stdout(predicate::str::contains("fibonacci"));
}

#[test]
fn count_as_json_keeps_big_numbers_exact() {
    let output = stair_ways().args(["--format", "json", "count", "100", "2"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ways"], "573147844013817084101");
    assert_eq!(value["stairs"], 100);
    assert_eq!(value["max_step"], 2);
}

#[test]
fn count_with_strategy_flag() {
    stair_ways()
        .args(["--format", "csv", "count", "30", "30", "--strategy", "memo"])
        .assert()
        .success()
        .stdout("stairs,max_step,strategy,ways\n30,30,memoized,536870912\n");
}

#[test]
fn negative_stairs_fail() {
    stair_ways()
        .args(["count", "-1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"))
        .stderr(predicate::str::contains("STAIRS"));
}

#[test]
fn zero_max_step_fails() {
    stair_ways()
        .args(["count", "5", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MAX_STEP"));
}

#[test]
fn recursive_limit_is_enforced() {
    stair_ways()
        .args(["count", "40", "3", "--strategy", "recursive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the recursive limit"));
}

#[test]
fn sequence_as_jsonl() {
    let output = stair_ways().args(["--format", "jsonl", "sequence", "5", "2"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let ways: Vec<String> = text
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["ways"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ways, ["0", "1", "2", "3", "5", "8"]);
}

#[test]
fn examples_succeed() {
    stair_ways()
        .args(["--format", "csv", "examples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed"))
        .stdout(predicate::str::contains("failed").not());
}

#[test]
fn verify_small_grid() {
    stair_ways()
        .args(["verify", "--max-stairs", "6", "--max-step", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all strategies agree"));
}

#[test]
fn verify_rejects_grids_above_the_stair_limit() {
    stair_ways()
        .args(["verify", "--max-stairs", "10000000000", "--max-step", "2"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the fibonacci limit of 100000"));
}

#[test]
fn verify_with_huge_max_step_finishes() {
    stair_ways()
        .args(["verify", "--max-stairs", "0", "--max-step", "100000000000"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("cells: 2 "))
        .stdout(predicate::str::contains("saturated widths: 99999999998"));
}

#[test]
fn examples_check_single_step_recursion() {
    let output = stair_ways().args(["--format", "jsonl", "examples"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let statuses: Vec<(u64, String, String)> = text
        .lines()
        .map(|line| {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            (
                row["index"].as_u64().unwrap(),
                row["strategy"].as_str().unwrap().to_string(),
                row["status"].as_str().unwrap().to_string(),
            )
        })
        .filter(|(_, strategy, _)| strategy == "recursive")
        .collect();
    assert!(statuses.contains(&(4, "recursive".to_string(), "passed".to_string())));
    assert!(statuses.contains(&(6, "recursive".to_string(), "skipped".to_string())));
}

#[test]
fn verify_rejects_zero_max_step() {
    stair_ways().args(["verify", "--max-step", "0"]).assert().failure();
}

#[test]
fn verbose_and_quiet_conflict() {
    stair_ways().args(["-v", "-q", "examples"]).assert().failure();
}

#[test]
fn config_file_and_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("stair_ways.json");
    std::fs::write(&config, r#"{"strategy": "memoized", "format": "csv"}"#).unwrap();
    let out = dir.path().join("out.csv");

    stair_ways()
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .args(["count", "16", "7"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "stairs,max_step,strategy,ways\n16,7,memoized,31489\n");
}

#[test]
fn config_with_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.json");
    std::fs::write(&config, r#"{"limits": {"max_stair": 3}}"#).unwrap();

    stair_ways()
        .arg("--config")
        .arg(&config)
        .args(["count", "3", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.json"));
}
