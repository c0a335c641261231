#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `hashbench` harness for the [`digests`] crate. It
//! checks every algorithm against a reference-digest table built from
//! independent implementations and measures one-shot hashing throughput.
//!
//! The entry points take explicit argument iterators and output writers so
//! tests can drive the harness without spawning a process. [`run`] returns
//! the numeric exit status; [`exit_code_from`] converts it for `main`.
//!
//! # Exit statuses
//!
//! | Status | Meaning |
//! |---|---|
//! | 0 | success, including `--help` and `--version` |
//! | 1 | the self-test found mismatching digests |
//! | 2 | invalid command line |
//! | 3 | writing the report failed |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(
//!     ["hashbench", "--test", "--vectors", "8", "-a", "sha256"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().contains("SHA-256     : ok"));
//! ```

mod args;
mod bench;
mod error;
mod logging;
mod reference;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

pub use args::{Args, DEFAULT_SIZE_MIB, DEFAULT_VECTOR_COUNT};
pub use bench::{Measurement, measure, run_benchmarks};
pub use error::{CliError, EXIT_IO, EXIT_SELF_TEST_FAILED, EXIT_SUCCESS, EXIT_USAGE};
pub use logging::level_for;
pub use reference::{
    FeedMode, Mismatch, SHA1_SEEDS, check_algorithm, reference_digest, reference_table,
    run_self_test,
};

/// Column width of the algorithm name in reports.
pub(crate) const NAME_WIDTH: usize = 12;

/// Largest exit status the harness reports.
const MAX_EXIT_CODE: i32 = 255;

/// Parses `arguments` and runs the requested self-test and benchmark.
///
/// Reports go to `stdout`; error messages go to `stderr`. Returns the process
/// exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let args = match Args::try_parse_from(arguments) {
        Ok(args) => args,
        Err(error) => return report_parse_error(&error, stdout, stderr),
    };

    logging::init(args.verbose);

    match execute(&args, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            if !matches!(error, CliError::SelfTest { .. }) {
                let _ = writeln!(stderr, "hashbench: {error}");
            }
            tracing::debug!(status = error.exit_status(), "run failed");
            error.exit_status()
        }
    }
}

fn report_parse_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(stdout, "{error}").is_err() {
                return EXIT_IO;
            }
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
    }
}

fn execute<Out: Write>(args: &Args, stdout: &mut Out) -> Result<(), CliError> {
    let algorithms = args.selected_algorithms();
    tracing::info!(
        algorithms = algorithms.len(),
        test = args.runs_tests(),
        benchmark = args.runs_benchmark(),
        "starting"
    );

    let mut self_test = Ok(());
    if args.runs_tests() {
        self_test = run_self_test(&algorithms, args.vectors, stdout);
        if let Err(CliError::Io(_)) = self_test {
            return self_test;
        }
    }

    if args.runs_benchmark() {
        run_benchmarks(&algorithms, args.size_bytes(), args.verbose, stdout)?;
    }

    writeln!(stdout, "Done.")?;
    stdout.flush()?;
    self_test
}

/// Converts a status returned by [`run`] into an [`ExitCode`].
pub fn exit_code_from(status: i32) -> ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    ExitCode::from(clamped as u8)
}

/// Runs the harness and converts the status for `main`.
#[must_use]
pub fn run_with<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    exit_code_from(run(arguments, stdout, stderr))
}
