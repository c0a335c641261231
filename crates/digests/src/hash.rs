use crate::engine::{Compression, Engine};

/// Trait implemented by every streaming hasher in this crate.
///
/// It lets generic code drive any algorithm without naming its compression
/// function, mirroring the inherent methods on [`Engine`].
///
/// # Examples
///
/// ```
/// use digests::{Md5, Sha256, StreamingHash};
///
/// fn hash_parts<H: StreamingHash>(parts: &[&[u8]]) -> H::Digest {
///     let mut hasher = H::new();
///     for part in parts {
///         hasher.update(part);
///     }
///     hasher.finalize()
/// }
///
/// assert_eq!(hash_parts::<Md5>(&[b"ab", b"c"]), Md5::digest(b"abc"));
/// assert_eq!(hash_parts::<Sha256>(&[b"a", b"bc"]).len(), Sha256::DIGEST_LEN);
/// ```
pub trait StreamingHash: Clone + Send + Sync {
    /// Digest type returned by [`finalize`](Self::finalize).
    type Digest: AsRef<[u8]> + Copy + Eq + Send + std::fmt::Debug;

    /// Algorithm name, e.g. `"SHA-1"`.
    const NAME: &'static str;
    /// Length of the digest in bytes.
    const DIGEST_LEN: usize;
    /// Size of one compression block in bytes.
    const BLOCK_LEN: usize;

    /// Creates a hasher in its initial state.
    fn new() -> Self;

    /// Appends `data` to the message.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of everything fed so far and resets the hasher.
    fn finalize(&mut self) -> Self::Digest;

    /// Restores the initial state.
    fn reset(&mut self);

    /// Computes the digest of `data` in one shot.
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl<C> StreamingHash for Engine<C>
where
    C: Compression,
    C::State: Send + Sync,
    C::Block: Send + Sync,
    C::Output: Send,
{
    type Digest = C::Output;

    const NAME: &'static str = C::NAME;
    const DIGEST_LEN: usize = C::DIGEST_LEN;
    const BLOCK_LEN: usize = C::BLOCK_LEN;

    fn new() -> Self {
        Self::new()
    }

    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }

    fn finalize(&mut self) -> Self::Digest {
        self.finalize()
    }

    fn reset(&mut self) {
        self.reset();
    }
}
