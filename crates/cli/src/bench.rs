//! One-shot throughput benchmark.

use std::io::Write;
use std::time::{Duration, Instant};

use digests::{Algorithm, Digest};

use crate::{NAME_WIDTH, error::CliError};

const MIB: f64 = 1024.0 * 1024.0;

/// Result of hashing one payload.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Payload size in bytes.
    pub bytes: usize,
    /// Wall-clock time of the one-shot digest.
    pub elapsed: Duration,
    /// Digest of the payload.
    pub digest: Digest,
}

impl Measurement {
    /// Throughput in MiB/s. A zero duration is clamped to one nanosecond.
    pub fn mib_per_sec(&self) -> f64 {
        let seconds = self.elapsed.max(Duration::from_nanos(1)).as_secs_f64();
        self.bytes as f64 / MIB / seconds
    }
}

/// Hashes `payload` once with `algorithm` and times it.
pub fn measure(algorithm: Algorithm, payload: &[u8]) -> Measurement {
    let start = Instant::now();
    let digest = algorithm.digest(payload);
    let elapsed = start.elapsed();

    Measurement {
        algorithm,
        bytes: payload.len(),
        elapsed,
        digest,
    }
}

/// Benchmarks each algorithm on `size` bytes of `'a'` and writes one line
/// per algorithm to `out`. With `verbose >= 2` the digest follows each line.
pub fn run_benchmarks<W: Write>(
    algorithms: &[Algorithm],
    size: usize,
    verbose: u8,
    out: &mut W,
) -> Result<Vec<Measurement>, CliError> {
    let payload = vec![b'a'; size];
    tracing::info!(bytes = size, "benchmark payload allocated");

    let mut results = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let measurement = measure(algorithm, &payload);
        writeln!(
            out,
            "{:<NAME_WIDTH$}: {:6.1}MB/s ({} bytes in {:.3}s)",
            algorithm.name(),
            measurement.mib_per_sec(),
            measurement.bytes,
            measurement.elapsed.as_secs_f64()
        )?;
        if verbose >= 2 {
            writeln!(out, "{}", hex::encode(measurement.digest))?;
        }
        tracing::debug!(
            algorithm = %algorithm,
            elapsed_ms = measurement.elapsed.as_millis() as u64,
            "benchmark finished"
        );
        results.push(measurement);
    }

    Ok(results)
}
