use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

#[test]
fn test_ordered_run_terminates() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    cmd.arg("ordered")
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Starting ordered demo...\n"))
        .stdout(predicate::str::contains("worker_one acquired both locks"))
        .stdout(predicate::str::contains("worker_two acquired both locks"))
        .stdout(predicate::str::ends_with("Both workers finished\n"));
}

#[test]
fn test_ordered_workers_take_lock_a_first() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    cmd.args(["ordered", "--delay", "50ms"])
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(predicate::str::contains("worker_one acquiring lock_a"))
        .stdout(predicate::str::contains("worker_two acquiring lock_a"))
        .stdout(predicate::str::contains("worker_two acquiring lock_b"));
}

#[test]
fn test_ordered_run_with_rendezvous_terminates() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deadlock-demo"));
    cmd.args(["ordered", "--rendezvous"])
        .timeout(Duration::from_secs(5))
        .assert()
        .success()
        .stdout(predicate::str::contains("acquired both locks").count(2))
        .stdout(predicate::str::ends_with("Both workers finished\n"));
}
