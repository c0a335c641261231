//! Reference-digest self-test.
//!
//! For every selected algorithm the digest of `"a" * i` is checked for each
//! `i` below the vector count, once with the whole input and once fed a byte
//! at a time. Expected values come from the RustCrypto implementations; a few
//! literal SHA-1 entries pin those down as well.

use std::io::Write;

use digest::Digest as _;
use digests::Algorithm;

use crate::{NAME_WIDTH, error::CliError};

/// Leading SHA-1 digests of `"a" * i`.
pub const SHA1_SEEDS: [&str; 4] = [
    "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8",
    "e0c9035898dd52fc65c41454cec9c4d2611bfb37",
    "7e240de74fb1ed08fa08d38063f6a6a91462a815",
];

/// How the input reached the hasher.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedMode {
    /// One `update` with the whole input.
    Whole,
    /// One `update` per byte.
    ByteAtATime,
    /// Reference table entry checked against a literal seed.
    Seed,
}

impl FeedMode {
    const fn label(self) -> &'static str {
        match self {
            Self::Whole => "all",
            Self::ByteAtATime => "single-char",
            Self::Seed => "seed",
        }
    }
}

/// One digest that differed from its reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mismatch {
    /// Algorithm under test.
    pub algorithm: Algorithm,
    /// How the input was fed.
    pub mode: FeedMode,
    /// Input length in bytes.
    pub len: usize,
    /// Expected digest, lowercase hex.
    pub expected: String,
    /// Computed digest, lowercase hex.
    pub actual: String,
}

/// Expected digest from the independent implementation.
pub fn reference_digest(algorithm: Algorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        Algorithm::Md5 => md5::Md5::digest(data).to_vec(),
        Algorithm::Sha1 => sha1::Sha1::digest(data).to_vec(),
        Algorithm::Sha224 => sha2::Sha224::digest(data).to_vec(),
        Algorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
        Algorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
        Algorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
    }
}

/// Reference table for `algorithm`: hex digests of `"a" * i` for
/// `i in 0..count`.
pub fn reference_table(algorithm: Algorithm, count: usize) -> Vec<String> {
    (0..count)
        .map(|len| hex::encode(reference_digest(algorithm, &vec![b'a'; len])))
        .collect()
}

/// Checks one algorithm against its reference table.
pub fn check_algorithm(algorithm: Algorithm, count: usize) -> Vec<Mismatch> {
    let table = reference_table(algorithm, count);
    let mut mismatches = Vec::new();

    if algorithm == Algorithm::Sha1 {
        for (len, (seed, expected)) in SHA1_SEEDS.iter().zip(&table).enumerate() {
            if seed != expected {
                mismatches.push(Mismatch {
                    algorithm,
                    mode: FeedMode::Seed,
                    len,
                    expected: (*seed).to_owned(),
                    actual: expected.clone(),
                });
            }
        }
    }

    let mut streaming = algorithm.hasher();
    for (len, expected) in table.iter().enumerate() {
        let input = vec![b'a'; len];

        let whole = hex::encode(algorithm.digest(&input));
        if &whole != expected {
            mismatches.push(Mismatch {
                algorithm,
                mode: FeedMode::Whole,
                len,
                expected: expected.clone(),
                actual: whole,
            });
        }

        for byte in &input {
            streaming.update(std::slice::from_ref(byte));
        }
        let bytewise = hex::encode(streaming.finalize());
        if &bytewise != expected {
            mismatches.push(Mismatch {
                algorithm,
                mode: FeedMode::ByteAtATime,
                len,
                expected: expected.clone(),
                actual: bytewise,
            });
        }
    }

    tracing::debug!(
        algorithm = %algorithm,
        vectors = count,
        mismatches = mismatches.len(),
        "reference table checked"
    );
    mismatches
}

/// Runs the self-test for `algorithms` and writes the report to `out`.
///
/// Returns [`CliError::SelfTest`] when any digest mismatched, after the full
/// report has been written.
pub fn run_self_test<W: Write>(
    algorithms: &[Algorithm],
    count: usize,
    out: &mut W,
) -> Result<(), CliError> {
    let mut failures = 0;

    for &algorithm in algorithms {
        let mismatches = check_algorithm(algorithm, count);
        for mismatch in &mismatches {
            writeln!(
                out,
                "FAILED: {}: {}: exp=\"{}\" act=\"{}\" len={}",
                mismatch.mode.label(),
                mismatch.algorithm,
                mismatch.expected,
                mismatch.actual,
                mismatch.len
            )?;
        }

        if mismatches.is_empty() {
            writeln!(out, "{:<NAME_WIDTH$}: ok", algorithm.name())?;
        } else {
            tracing::warn!(algorithm = %algorithm, failures = mismatches.len(), "digest mismatches");
            writeln!(
                out,
                "{:<NAME_WIDTH$}: {} error(s) found",
                algorithm.name(),
                mismatches.len()
            )?;
        }
        failures += mismatches.len();
    }

    writeln!(out, "{failures} error(s) found total")?;

    if failures == 0 {
        Ok(())
    } else {
        Err(CliError::SelfTest { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_starts_with_seeds() {
        let table = reference_table(Algorithm::Sha1, SHA1_SEEDS.len());
        assert_eq!(table, SHA1_SEEDS);
    }

    #[test]
    fn reference_digest_lengths() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                reference_digest(algorithm, b"").len(),
                algorithm.digest_len(),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn every_algorithm_passes() {
        for algorithm in Algorithm::ALL {
            assert!(check_algorithm(algorithm, 140).is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn report_lists_each_algorithm() {
        let mut out = Vec::new();
        run_self_test(&[Algorithm::Sha256, Algorithm::Md5], 70, &mut out)
            .expect("self-test passes");

        let report = String::from_utf8(out).expect("report is utf-8");
        assert!(report.contains("SHA-256     : ok"), "{report}");
        assert!(report.contains("MD5         : ok"), "{report}");
        assert!(report.ends_with("0 error(s) found total\n"), "{report}");
    }

    #[test]
    fn zero_vectors_checks_nothing() {
        assert!(check_algorithm(Algorithm::Sha512, 0).is_empty());
    }

    #[test]
    fn failed_write_is_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let error = run_self_test(&[Algorithm::Md5], 1, &mut Closed).unwrap_err();
        assert!(matches!(error, CliError::Io(_)));
    }
}
