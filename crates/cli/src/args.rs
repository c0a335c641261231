//! Command-line options for the harness.

use clap::{ArgAction, Parser};
use digests::Algorithm;

/// Default benchmark payload in MiB.
pub const DEFAULT_SIZE_MIB: u64 = 256;

/// Default number of `"a" * i` reference inputs per algorithm.
pub const DEFAULT_VECTOR_COUNT: usize = 260;

/// Run self-tests and throughput benchmarks of the digest implementations.
///
/// With neither `--test` nor `--benchmark`, both run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "hashbench")]
#[command(about = "Run self-tests and benchmarks of the MD5, SHA-1 and SHA-2 digests")]
#[command(version)]
pub struct Args {
    /// Check every algorithm against the reference-digest table.
    #[arg(short, long)]
    pub test: bool,

    /// Measure one-shot hashing throughput.
    #[arg(short, long)]
    pub benchmark: bool,

    /// Benchmark payload size in MiB.
    #[arg(
        short,
        long,
        value_name = "MIB",
        default_value_t = DEFAULT_SIZE_MIB,
        value_parser = clap::value_parser!(u64).range(1..=65536),
    )]
    pub size: u64,

    /// Restrict the run to one algorithm. Repeat for several; default is all.
    #[arg(short, long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<Algorithm>,

    /// Number of `"a" * i` reference inputs checked per algorithm.
    #[arg(short = 'n', long = "vectors", value_name = "N", default_value_t = DEFAULT_VECTOR_COUNT)]
    pub vectors: usize,

    /// Increase verbosity. Specify multiple times to be more verbose.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Whether the self-test runs.
    pub fn runs_tests(&self) -> bool {
        self.test || !self.benchmark
    }

    /// Whether the benchmark runs.
    pub fn runs_benchmark(&self) -> bool {
        self.benchmark || !self.test
    }

    /// Algorithms selected on the command line, widest digest first and
    /// without duplicates. Empty selection means every algorithm.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            return Algorithm::ALL.to_vec();
        }
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| self.algorithms.contains(algorithm))
            .collect()
    }

    /// Benchmark payload size in bytes.
    pub fn size_bytes(&self) -> usize {
        (self.size as usize) << 20
    }
}
