use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

const OBSERVATION_WINDOW: Duration = Duration::from_secs(5);

fn line_index(stdout: &str, line: &str) -> usize {
    stdout
        .lines()
        .position(|l| l == line)
        .unwrap_or_else(|| panic!("missing line {line:?} in:\n{stdout}"))
}

#[test]
fn test_default_run_hangs() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    cmd.timeout(OBSERVATION_WINDOW)
        .assert()
        .interrupted()
        .stdout(predicate::str::starts_with("Starting deadlock demo...\n"))
        .stdout(predicate::str::contains("worker_one acquiring lock_a"))
        .stdout(predicate::str::contains("worker_two acquiring lock_b"))
        .stdout(predicate::str::contains("worker_one acquiring lock_b"))
        .stdout(predicate::str::contains("worker_two acquiring lock_a"))
        .stdout(predicate::str::contains("acquired both locks").not())
        .stdout(predicate::str::contains("Both workers finished").not());
}

#[test]
fn test_first_acquisitions_precede_second_acquisitions() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    let output = cmd
        .arg("--rendezvous")
        .timeout(Duration::from_secs(2))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), None, "process should have been killed");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5, "unexpected output:\n{stdout}");

    let one_first = line_index(&stdout, "worker_one acquiring lock_a");
    let two_first = line_index(&stdout, "worker_two acquiring lock_b");
    let one_second = line_index(&stdout, "worker_one acquiring lock_b");
    let two_second = line_index(&stdout, "worker_two acquiring lock_a");

    assert!(one_first.max(two_first) < one_second.min(two_second));
}

#[test]
fn test_repeated_runs_all_hang() {
    for _ in 0..3 {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
        cmd.args(["--delay", "200ms"])
            .timeout(Duration::from_secs(2))
            .assert()
            .interrupted()
            .stdout(predicate::str::contains("acquired both locks").not());
    }
}

#[test]
fn test_diagnostics_stay_off_stdout() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    cmd.args(["--rendezvous", "-vv"])
        .timeout(Duration::from_secs(2))
        .assert()
        .interrupted()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("expect a hang"));
}
