//! Explicit conversions between byte blocks and fixed-width words.
//!
//! Every transform reads its sixteen message words through these helpers
//! instead of reinterpreting the block in place. The byte order is chosen by
//! the algorithm, never by the host, so the same code produces identical
//! digests on little- and big-endian targets.

/// Byte order in which an algorithm serializes its words and length field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// Least significant byte first (MD5).
    Little,
    /// Most significant byte first (SHA-1 and SHA-2).
    Big,
}

/// Splits a 64-byte block into sixteen little-endian 32-bit words.
#[inline(always)]
pub(crate) fn load_u32_le(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), 64);
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Splits a 64-byte block into sixteen big-endian 32-bit words.
#[inline(always)]
pub(crate) fn load_u32_be(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), 64);
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Splits a 128-byte block into sixteen big-endian 64-bit words.
#[inline(always)]
pub(crate) fn load_u64_be(block: &[u8]) -> [u64; 16] {
    debug_assert_eq!(block.len(), 128);
    let mut words = [0u64; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(8)) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        *word = u64::from_be_bytes(raw);
    }
    words
}

/// Writes `words` into `out` as consecutive 32-bit values.
///
/// `out` may be shorter than the words it receives; serialization stops at
/// the end of `out`, which is how truncated variants such as SHA-224 drop
/// their trailing state word.
pub(crate) fn store_u32(words: &[u32], order: ByteOrder, out: &mut [u8]) {
    for (bytes, word) in out.chunks_mut(4).zip(words) {
        let encoded = match order {
            ByteOrder::Little => word.to_le_bytes(),
            ByteOrder::Big => word.to_be_bytes(),
        };
        bytes.copy_from_slice(&encoded[..bytes.len()]);
    }
}

/// Writes `words` into `out` as consecutive big-endian 64-bit values.
///
/// Truncation follows the same rule as [`store_u32`].
pub(crate) fn store_u64_be(words: &[u64], out: &mut [u8]) {
    for (bytes, word) in out.chunks_mut(8).zip(words) {
        bytes.copy_from_slice(&word.to_be_bytes()[..bytes.len()]);
    }
}
