use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn hashbench() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hashbench"))
}

#[test]
fn help_lists_usage() {
    hashbench()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--benchmark"))
        .stdout(predicate::str::contains("--algorithm"));
}

#[test]
fn version_reports_name() {
    hashbench()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hashbench "));
}

#[test]
fn self_test_passes_for_all_algorithms() {
    hashbench()
        .args(["--test", "--vectors", "130"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("SHA-512     : ok"))
        .stdout(predicate::str::contains("SHA-384     : ok"))
        .stdout(predicate::str::contains("SHA-256     : ok"))
        .stdout(predicate::str::contains("SHA-224     : ok"))
        .stdout(predicate::str::contains("SHA-1       : ok"))
        .stdout(predicate::str::contains("MD5         : ok"))
        .stdout(predicate::str::contains("0 error(s) found total"))
        .stdout(predicate::str::ends_with("Done.\n"));
}

#[test]
fn benchmark_reports_throughput() {
    hashbench()
        .args(["--benchmark", "--size", "1", "-a", "sha256"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"SHA-256     : +[0-9.]+MB/s \(1048576 bytes in [0-9.]+s\)")
                .expect("valid regex"),
        );
}

#[test]
fn verbose_benchmark_prints_digest() {
    hashbench()
        .args(["-b", "-s", "1", "-a", "md5", "-vv"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^[0-9a-f]{32}$").expect("valid regex"));
}

#[test]
fn unknown_flag_is_usage_error() {
    hashbench()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}

#[test]
fn unknown_algorithm_is_usage_error() {
    hashbench()
        .args(["-a", "whirlpool"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown digest algorithm 'whirlpool'"));
}

#[test]
fn zero_size_is_rejected() {
    hashbench().args(["-b", "-s", "0"]).assert().code(2);
}
