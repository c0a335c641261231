use std::io;

/// Exit status for a clean run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the self-test found mismatching digests.
pub const EXIT_SELF_TEST_FAILED: i32 = 1;
/// Exit status for invalid command-line usage.
pub const EXIT_USAGE: i32 = 2;
/// Exit status when writing a report failed.
pub const EXIT_IO: i32 = 3;

/// Errors raised by the harness.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    /// The self-test finished with mismatching digests.
    #[error("self-test failed: {failures} mismatching digest(s)")]
    SelfTest {
        /// Number of mismatches across all algorithms.
        failures: usize,
    },
}

impl CliError {
    /// Process exit status for this error.
    pub const fn exit_status(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Io(_) => EXIT_IO,
            Self::SelfTest { .. } => EXIT_SELF_TEST_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_statuses_are_distinct() {
        let usage = CliError::Usage(clap::Error::new(clap::error::ErrorKind::UnknownArgument));
        let io = CliError::Io(io::Error::other("closed"));
        let failed = CliError::SelfTest { failures: 4 };

        assert_eq!(usage.exit_status(), EXIT_USAGE);
        assert_eq!(io.exit_status(), EXIT_IO);
        assert_eq!(failed.exit_status(), EXIT_SELF_TEST_FAILED);
    }

    #[test]
    fn messages_are_lowercase() {
        let failed = CliError::SelfTest { failures: 2 };
        assert_eq!(failed.to_string(), "self-test failed: 2 mismatching digest(s)");

        let io = CliError::from(io::Error::other("broken pipe"));
        assert_eq!(io.to_string(), "failed to write report: broken pipe");
    }
}
