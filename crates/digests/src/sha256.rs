//! SHA-256 and SHA-224 as specified by FIPS PUB 180-4, section 6.2 and 6.3.
//!
//! SHA-224 runs the SHA-256 compression function from a different initial
//! state and truncates the output to seven words.

use crate::engine::{Compression, Engine};
use crate::words::{self, ByteOrder};

/// Streaming SHA-256 hasher producing a 32-byte digest.
///
/// # Examples
///
/// ```
/// use digests::Sha256;
///
/// let digest = Sha256::digest(b"abc");
/// assert_eq!(digest.len(), 32);
/// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
pub type Sha256 = Engine<Sha256Core>;

/// Streaming SHA-224 hasher producing a 28-byte digest.
pub type Sha224 = Engine<Sha224Core>;

/// SHA-256 compression function and parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sha256Core;

/// SHA-224 parameters on top of the SHA-256 compression function.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sha224Core;

const SHA256_INITIAL_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const SHA224_INITIAL_STATE: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes.
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

impl Compression for Sha256Core {
    const NAME: &'static str = "SHA-256";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const DIGEST_LEN: usize = 32;
    const ORDER: ByteOrder = ByteOrder::Big;

    type State = [u32; 8];
    type Block = [u8; 64];
    type Output = [u8; 32];

    const INITIAL_STATE: Self::State = SHA256_INITIAL_STATE;
    const EMPTY_BLOCK: Self::Block = [0; 64];
    const EMPTY_OUTPUT: Self::Output = [0; 32];

    fn compress(state: &mut Self::State, block: &[u8]) {
        compress(state, words::load_u32_be(block));
    }

    fn output(state: &Self::State, out: &mut [u8]) {
        words::store_u32(state, ByteOrder::Big, out);
    }
}

impl Compression for Sha224Core {
    const NAME: &'static str = "SHA-224";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const DIGEST_LEN: usize = 28;
    const ORDER: ByteOrder = ByteOrder::Big;

    type State = [u32; 8];
    type Block = [u8; 64];
    type Output = [u8; 28];

    const INITIAL_STATE: Self::State = SHA224_INITIAL_STATE;
    const EMPTY_BLOCK: Self::Block = [0; 64];
    const EMPTY_OUTPUT: Self::Output = [0; 28];

    fn compress(state: &mut Self::State, block: &[u8]) {
        compress(state, words::load_u32_be(block));
    }

    fn output(state: &Self::State, out: &mut [u8]) {
        words::store_u32(state, ByteOrder::Big, out);
    }
}

#[inline(always)]
const fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
const fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
const fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
const fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn compress(state: &mut [u32; 8], block: [u32; 16]) {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(&block);
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for (&k, &word) in K.iter().zip(&w) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(word);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (slot, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(value);
    }
}
