//! Merkle–Damgård padding and length encoding.

use super::Compression;
use crate::words::ByteOrder;

/// Terminator byte carrying the single `1` bit appended to every message.
const TERMINATOR: u8 = 0x80;

/// Pads the buffered tail of a `len`-byte message and compresses the final
/// block, or the final two blocks when the terminator and length field do
/// not fit behind the tail.
pub(super) fn finish<C: Compression>(state: &mut C::State, buffer: &mut C::Block, len: u128) {
    let block = buffer.as_mut();
    let buffered = (len % C::BLOCK_LEN as u128) as usize;
    let length_offset = C::BLOCK_LEN - C::LENGTH_LEN;

    block[buffered] = TERMINATOR;
    block[buffered + 1..].fill(0);

    if buffered + 1 > length_offset {
        C::compress(state, block);
        block[..length_offset].fill(0);
    }

    encode_bit_length(&mut block[length_offset..], len, C::ORDER);
    C::compress(state, block);
}

/// Writes the message length in bits into `field`.
///
/// Fields narrower than 128 bits keep the low-order bits, so a 64-bit field
/// carries the length modulo 2^64 as RFC 1321 and FIPS 180-4 require.
fn encode_bit_length(field: &mut [u8], len: u128, order: ByteOrder) {
    let bits = len.wrapping_mul(8);
    match order {
        ByteOrder::Little => {
            let bytes = bits.to_le_bytes();
            field.copy_from_slice(&bytes[..field.len()]);
        }
        ByteOrder::Big => {
            let bytes = bits.to_be_bytes();
            field.copy_from_slice(&bytes[bytes.len() - field.len()..]);
        }
    }
}
