//! Exit status tests driving the harness in-process.
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success, including `--help`/`--version`  |
//! |  1   | Self-test found mismatching digests      |
//! |  2   | Invalid command line                     |
//! |  3   | Writing the report failed                |

use std::io::{self, Write};
use std::process::ExitCode;

/// Writer whose every write fails, as a closed pipe would.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn success_maps_to_zero() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = cli::run_with(
        ["hashbench", "-t", "-n", "10", "-a", "sha1"],
        &mut stdout,
        &mut stderr,
    );
    assert_eq!(exit, ExitCode::SUCCESS);
    assert!(stderr.is_empty());
}

#[test]
fn usage_error_maps_to_two() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = cli::run(["hashbench", "--size"], &mut stdout, &mut stderr);
    assert_eq!(status, cli::EXIT_USAGE);
    assert!(!stderr.is_empty());
}

#[test]
fn closed_stdout_maps_to_three() {
    let mut stderr = Vec::new();
    let status = cli::run(
        ["hashbench", "-t", "-n", "2", "-a", "md5"],
        &mut ClosedPipe,
        &mut stderr,
    );
    assert_eq!(status, cli::EXIT_IO);

    let message = String::from_utf8(stderr).expect("stderr is utf-8");
    assert!(message.contains("failed to write report"), "{message}");
}

#[test]
fn closed_stdout_on_help_maps_to_three() {
    let mut stderr = Vec::new();
    let status = cli::run(["hashbench", "--help"], &mut ClosedPipe, &mut stderr);
    assert_eq!(status, cli::EXIT_IO);
}

#[test]
fn self_test_failure_status_is_one() {
    let error = cli::CliError::SelfTest { failures: 3 };
    assert_eq!(error.exit_status(), cli::EXIT_SELF_TEST_FAILED);
    assert_eq!(cli::exit_code_from(error.exit_status()), ExitCode::from(1));
}
