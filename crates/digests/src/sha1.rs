//! SHA-1 as specified by FIPS PUB 180-4, section 6.1.
//!
//! SHA-1 is no longer collision resistant. It remains available for
//! interoperability with existing content-addressing and integrity formats.

use crate::engine::{Compression, Engine};
use crate::words::{self, ByteOrder};

/// Streaming SHA-1 hasher producing a 20-byte digest.
///
/// # Examples
///
/// ```
/// use digests::Sha1;
///
/// let mut hasher = Sha1::new();
/// hasher.update(b"The quick brown fox ");
/// hasher.update(b"jumps over the lazy dog");
/// assert_eq!(hasher.finalize()[..2], [0x2f, 0xd4]);
/// ```
pub type Sha1 = Engine<Sha1Core>;

/// SHA-1 compression function and parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sha1Core;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants for steps 0-19, 20-39, 40-59 and 60-79.
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

impl Compression for Sha1Core {
    const NAME: &'static str = "SHA-1";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const DIGEST_LEN: usize = 20;
    const ORDER: ByteOrder = ByteOrder::Big;

    type State = [u32; 5];
    type Block = [u8; 64];
    type Output = [u8; 20];

    const INITIAL_STATE: Self::State = INITIAL_STATE;
    const EMPTY_BLOCK: Self::Block = [0; 64];
    const EMPTY_OUTPUT: Self::Output = [0; 20];

    fn compress(state: &mut Self::State, block: &[u8]) {
        compress(state, words::load_u32_be(block));
    }

    fn output(state: &Self::State, out: &mut [u8]) {
        words::store_u32(state, ByteOrder::Big, out);
    }
}

/// Expands the sixteen block words into the 80-word schedule.
fn schedule(block: [u32; 16]) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(&block);
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

fn compress(state: &mut [u32; 5], block: [u32; 16]) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &word) in w.iter().enumerate() {
        let (f, k) = match t {
            0..=19 => ((b & c) | (!b & d), K[0]),
            20..=39 => (b ^ c ^ d, K[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
            _ => (b ^ c ^ d, K[3]),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
