//! Runtime algorithm selection.
//!
//! [`Algorithm`] names every digest the crate implements so callers can pick
//! one from configuration or command-line input, and [`DynHasher`] wraps the
//! matching engine behind a single type.

use std::fmt;
use std::str::FromStr;

use crate::hash::StreamingHash;
use crate::{Md5, Sha1, Sha224, Sha256, Sha384, Sha512};

/// Largest digest produced by any supported algorithm.
pub const MAX_DIGEST_LEN: usize = 64;

/// Digest algorithms available at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Algorithm {
    /// MD5, 128-bit digest.
    Md5,
    /// SHA-1, 160-bit digest.
    Sha1,
    /// SHA-224, 224-bit digest.
    Sha224,
    /// SHA-256, 256-bit digest.
    Sha256,
    /// SHA-384, 384-bit digest.
    Sha384,
    /// SHA-512, 512-bit digest.
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, widest digest first.
    pub const ALL: [Self; 6] = [
        Self::Sha512,
        Self::Sha384,
        Self::Sha256,
        Self::Sha224,
        Self::Sha1,
        Self::Md5,
    ];

    /// Canonical display name, e.g. `"SHA-256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => <Md5 as StreamingHash>::NAME,
            Self::Sha1 => <Sha1 as StreamingHash>::NAME,
            Self::Sha224 => <Sha224 as StreamingHash>::NAME,
            Self::Sha256 => <Sha256 as StreamingHash>::NAME,
            Self::Sha384 => <Sha384 as StreamingHash>::NAME,
            Self::Sha512 => <Sha512 as StreamingHash>::NAME,
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 => <Md5 as StreamingHash>::DIGEST_LEN,
            Self::Sha1 => <Sha1 as StreamingHash>::DIGEST_LEN,
            Self::Sha224 => <Sha224 as StreamingHash>::DIGEST_LEN,
            Self::Sha256 => <Sha256 as StreamingHash>::DIGEST_LEN,
            Self::Sha384 => <Sha384 as StreamingHash>::DIGEST_LEN,
            Self::Sha512 => <Sha512 as StreamingHash>::DIGEST_LEN,
        }
    }

    /// Compression block size in bytes.
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Md5 => <Md5 as StreamingHash>::BLOCK_LEN,
            Self::Sha1 => <Sha1 as StreamingHash>::BLOCK_LEN,
            Self::Sha224 => <Sha224 as StreamingHash>::BLOCK_LEN,
            Self::Sha256 => <Sha256 as StreamingHash>::BLOCK_LEN,
            Self::Sha384 => <Sha384 as StreamingHash>::BLOCK_LEN,
            Self::Sha512 => <Sha512 as StreamingHash>::BLOCK_LEN,
        }
    }

    /// Creates a streaming hasher for this algorithm.
    #[must_use]
    pub fn hasher(self) -> DynHasher {
        match self {
            Self::Md5 => DynHasher::Md5(Md5::new()),
            Self::Sha1 => DynHasher::Sha1(Sha1::new()),
            Self::Sha224 => DynHasher::Sha224(Sha224::new()),
            Self::Sha256 => DynHasher::Sha256(Sha256::new()),
            Self::Sha384 => DynHasher::Sha384(Sha384::new()),
            Self::Sha512 => DynHasher::Sha512(Sha512::new()),
        }
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised algorithm name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown digest algorithm '{name}' (expected one of md5, sha1, sha224, sha256, sha384, sha512)")]
pub struct UnknownAlgorithm {
    name: String,
}

impl UnknownAlgorithm {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses names case-insensitively, with or without the dash after
    /// `sha` (`"SHA-256"`, `"sha256"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(UnknownAlgorithm {
                name: s.to_owned(),
            }),
        }
    }
}

/// Owned digest produced by a runtime-selected algorithm.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Digest {
    algorithm: Algorithm,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    fn new(algorithm: Algorithm, digest: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..digest.len()].copy_from_slice(digest);
        Self { algorithm, bytes }
    }

    /// Algorithm that produced the digest.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_len()]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Always `false`; every supported digest has at least 16 bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

/// Streaming hasher for an algorithm chosen at runtime.
#[derive(Clone, Debug)]
pub enum DynHasher {
    /// MD5 engine.
    Md5(Md5),
    /// SHA-1 engine.
    Sha1(Sha1),
    /// SHA-224 engine.
    Sha224(Sha224),
    /// SHA-256 engine.
    Sha256(Sha256),
    /// SHA-384 engine.
    Sha384(Sha384),
    /// SHA-512 engine.
    Sha512(Sha512),
}

impl DynHasher {
    /// Algorithm this hasher computes.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Md5(_) => Algorithm::Md5,
            Self::Sha1(_) => Algorithm::Sha1,
            Self::Sha224(_) => Algorithm::Sha224,
            Self::Sha256(_) => Algorithm::Sha256,
            Self::Sha384(_) => Algorithm::Sha384,
            Self::Sha512(_) => Algorithm::Sha512,
        }
    }

    /// Appends `data` to the message.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(hasher) => hasher.update(data),
            Self::Sha1(hasher) => hasher.update(data),
            Self::Sha224(hasher) => hasher.update(data),
            Self::Sha256(hasher) => hasher.update(data),
            Self::Sha384(hasher) => hasher.update(data),
            Self::Sha512(hasher) => hasher.update(data),
        }
    }

    /// Returns the digest of everything fed so far and resets the hasher.
    #[must_use = "finalize consumes the message; dropping the digest loses it"]
    pub fn finalize(&mut self) -> Digest {
        let algorithm = self.algorithm();
        match self {
            Self::Md5(hasher) => Digest::new(algorithm, &hasher.finalize()),
            Self::Sha1(hasher) => Digest::new(algorithm, &hasher.finalize()),
            Self::Sha224(hasher) => Digest::new(algorithm, &hasher.finalize()),
            Self::Sha256(hasher) => Digest::new(algorithm, &hasher.finalize()),
            Self::Sha384(hasher) => Digest::new(algorithm, &hasher.finalize()),
            Self::Sha512(hasher) => Digest::new(algorithm, &hasher.finalize()),
        }
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        match self {
            Self::Md5(hasher) => hasher.reset(),
            Self::Sha1(hasher) => hasher.reset(),
            Self::Sha224(hasher) => hasher.reset(),
            Self::Sha256(hasher) => hasher.reset(),
            Self::Sha384(hasher) => hasher.reset(),
            Self::Sha512(hasher) => hasher.reset(),
        }
    }
}
