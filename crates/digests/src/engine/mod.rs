//! Streaming Merkle–Damgård engine shared by every algorithm.
//!
//! [`Engine`] owns the running state, a one-block accumulation buffer and the
//! total byte counter. The algorithm-specific parts (block size, length
//! field, byte order, initial state and the compression function) come from a
//! [`Compression`] implementation, so MD5, SHA-1 and the SHA-2 family all run
//! through the same buffering and padding code.
//!
//! # Invariants
//!
//! - Between calls, [`Engine::buffered_len`] equals `len() % BLOCK_LEN` and
//!   is strictly less than one block.
//! - The counter only grows until [`Engine::finalize`] or [`Engine::reset`]
//!   returns it to zero.
//! - [`Engine::finalize`] leaves the engine in the same state as
//!   [`Engine::new`].

mod padding;
#[cfg(test)]
mod tests;

use std::fmt;
use std::io::{self, Read, Write};

use crate::words::ByteOrder;

/// Algorithm parameters and block transform plugged into [`Engine`].
///
/// Implementations are zero-sized markers; all state lives in the engine.
pub trait Compression {
    /// Human-readable algorithm name, e.g. `"SHA-256"`.
    const NAME: &'static str;
    /// Size of one input block in bytes.
    const BLOCK_LEN: usize;
    /// Width of the trailing bit-length field in bytes.
    const LENGTH_LEN: usize;
    /// Length of the produced digest in bytes.
    const DIGEST_LEN: usize;
    /// Byte order of message words, the length field and the digest.
    const ORDER: ByteOrder;

    /// Chaining state mutated once per block.
    type State: Copy + fmt::Debug + Eq;
    /// Byte array holding exactly one block.
    type Block: AsRef<[u8]> + AsMut<[u8]> + Copy;
    /// Byte array holding exactly one digest.
    type Output: AsRef<[u8]> + AsMut<[u8]> + Copy + fmt::Debug + Eq;

    /// State installed by [`Engine::new`] and [`Engine::reset`].
    const INITIAL_STATE: Self::State;
    /// All-zero block used to clear the accumulation buffer.
    const EMPTY_BLOCK: Self::Block;
    /// All-zero digest buffer filled by [`Compression::output`].
    const EMPTY_OUTPUT: Self::Output;

    /// Mixes one block into `state`.
    ///
    /// `block` is always exactly [`BLOCK_LEN`](Self::BLOCK_LEN) bytes long.
    fn compress(state: &mut Self::State, block: &[u8]);

    /// Serializes the state words into `out`.
    fn output(state: &Self::State, out: &mut [u8]);
}

/// Incremental hasher parameterized by its compression function.
///
/// The public algorithm types ([`Md5`](crate::Md5), [`Sha256`](crate::Sha256)
/// and friends) are aliases of this type.
///
/// # Examples
///
/// ```
/// use digests::Sha1;
///
/// let mut hasher = Sha1::new();
/// hasher.update(b"a");
/// hasher.update(b"bc");
/// let digest = hasher.finalize();
///
/// assert_eq!(digest, Sha1::digest(b"abc"));
/// // finalize resets the engine, so it can hash the next message directly
/// assert!(hasher.is_empty());
/// ```
pub struct Engine<C: Compression> {
    state: C::State,
    buffer: C::Block,
    len: u128,
}

impl<C: Compression> Engine<C> {
    /// Default buffer length used by [`update_reader`](Self::update_reader).
    pub const DEFAULT_READER_BUFFER_LEN: usize = 64 * 1024;

    /// Creates an engine holding the algorithm's initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: C::INITIAL_STATE,
            buffer: C::EMPTY_BLOCK,
            len: 0,
        }
    }

    /// Restores the initial state and forgets every byte seen so far.
    pub fn reset(&mut self) {
        self.state = C::INITIAL_STATE;
        self.buffer = C::EMPTY_BLOCK;
        self.len = 0;
    }

    /// Number of bytes fed into the engine since the last reset.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u128 {
        self.len
    }

    /// Returns `true` if no bytes have been fed since the last reset.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes waiting in the accumulation buffer for a full block.
    #[inline]
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        (self.len % C::BLOCK_LEN as u128) as usize
    }

    /// Appends `data` to the message.
    ///
    /// Whole blocks are compressed straight from `data`; only a partial head
    /// completing the buffered tail and the final partial tail are copied.
    pub fn update(&mut self, data: &[u8]) {
        let mut buffered = self.buffered_len();
        let mut input = data;
        self.len += data.len() as u128;

        if buffered > 0 && buffered + input.len() >= C::BLOCK_LEN {
            let (head, rest) = input.split_at(C::BLOCK_LEN - buffered);
            self.buffer.as_mut()[buffered..].copy_from_slice(head);
            C::compress(&mut self.state, self.buffer.as_ref());
            input = rest;
            buffered = 0;
        }

        let mut blocks = input.chunks_exact(C::BLOCK_LEN);
        for block in &mut blocks {
            C::compress(&mut self.state, block);
        }

        let tail = blocks.remainder();
        self.buffer.as_mut()[buffered..buffered + tail.len()].copy_from_slice(tail);
    }

    /// Pads the message, returns its digest and resets the engine.
    #[must_use = "finalize consumes the message; dropping the digest loses it"]
    pub fn finalize(&mut self) -> C::Output {
        padding::finish::<C>(&mut self.state, &mut self.buffer, self.len);
        let mut output = C::EMPTY_OUTPUT;
        C::output(&self.state, output.as_mut());
        self.reset();
        output
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> C::Output {
        let mut engine = Self::new();
        engine.update(data);
        engine.finalize()
    }

    /// Feeds every byte produced by `reader` until end of input.
    ///
    /// Interrupted reads are retried; any other I/O error is returned with
    /// the bytes read so far already absorbed. Returns the number of bytes
    /// consumed.
    pub fn update_reader_with_buffer<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> io::Result<u64> {
        if buffer.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "digest reader buffer must not be empty",
            ));
        }

        let mut total = 0u64;
        loop {
            match reader.read(buffer) {
                Ok(0) => break,
                Ok(n) => {
                    self.update(&buffer[..n]);
                    total = total.saturating_add(n as u64);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "leanhash::digests",
            algorithm = C::NAME,
            bytes = total,
            "absorbed reader input"
        );

        Ok(total)
    }

    /// Convenience wrapper around
    /// [`update_reader_with_buffer`](Self::update_reader_with_buffer) that
    /// allocates a heap buffer.
    pub fn update_reader<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; Self::DEFAULT_READER_BUFFER_LEN];
        self.update_reader_with_buffer(reader, &mut buffer)
    }
}

impl<C: Compression> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compression> Clone for Engine<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            buffer: self.buffer,
            len: self.len,
        }
    }
}

impl<C: Compression> fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("algorithm", &C::NAME)
            .field("len", &self.len)
            .field("buffered", &self.buffered_len())
            .finish_non_exhaustive()
    }
}

impl<C: Compression> Write for Engine<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.update(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
