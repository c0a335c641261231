//! MD5 as specified by RFC 1321.
//!
//! MD5 is broken for collision resistance and is only offered for
//! compatibility with formats and protocols that still require it.

use crate::engine::{Compression, Engine};
use crate::words::{self, ByteOrder};

/// Streaming MD5 hasher producing a 16-byte digest.
///
/// # Examples
///
/// ```
/// use digests::Md5;
///
/// let digest = Md5::digest(b"abc");
/// assert_eq!(digest[..4], [0x90, 0x01, 0x50, 0x98]);
/// ```
pub type Md5 = Engine<Md5Core>;

/// MD5 compression function and parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Md5Core;

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Additive constant per step, `floor(abs(sin(step + 1)) * 2^32)`.
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotate amount per step.
const SHIFTS: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// Message word consumed by each step.
const MESSAGE_INDEX: [usize; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, //
    5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2, //
    0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9,
];

impl Compression for Md5Core {
    const NAME: &'static str = "MD5";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const DIGEST_LEN: usize = 16;
    const ORDER: ByteOrder = ByteOrder::Little;

    type State = [u32; 4];
    type Block = [u8; 64];
    type Output = [u8; 16];

    const INITIAL_STATE: Self::State = INITIAL_STATE;
    const EMPTY_BLOCK: Self::Block = [0; 64];
    const EMPTY_OUTPUT: Self::Output = [0; 16];

    fn compress(state: &mut Self::State, block: &[u8]) {
        compress(state, &words::load_u32_le(block));
    }

    fn output(state: &Self::State, out: &mut [u8]) {
        words::store_u32(state, ByteOrder::Little, out);
    }
}

#[inline(always)]
fn step(a: u32, b: u32, mixed: u32, index: usize, x: &[u32; 16]) -> u32 {
    b.wrapping_add(
        a.wrapping_add(mixed)
            .wrapping_add(K[index])
            .wrapping_add(x[MESSAGE_INDEX[index]])
            .rotate_left(SHIFTS[index]),
    )
}

fn compress(state: &mut [u32; 4], x: &[u32; 16]) {
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..16 {
        let next = step(a, b, (b & c) | (!b & d), i, x);
        (a, b, c, d) = (d, next, b, c);
    }
    for i in 16..32 {
        let next = step(a, b, (b & d) | (c & !d), i, x);
        (a, b, c, d) = (d, next, b, c);
    }
    for i in 32..48 {
        let next = step(a, b, b ^ c ^ d, i, x);
        (a, b, c, d) = (d, next, b, c);
    }
    for i in 48..64 {
        let next = step(a, b, c ^ (b | !d), i, x);
        (a, b, c, d) = (d, next, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
