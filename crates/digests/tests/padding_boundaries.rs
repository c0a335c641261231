//! Message lengths around the padding boundaries.
//!
//! A 64-byte block with an 8-byte length field overflows into a second
//! padding block once 56 bytes are buffered; a 128-byte block with a 16-byte
//! field does the same at 112.

use digest::Digest as _;
use digests::{Algorithm, Md5, Sha1, Sha256, Sha512, StreamingHash};

fn boundary_lengths(block_len: usize, length_len: usize) -> Vec<usize> {
    let split = block_len - length_len;
    let mut lengths = Vec::new();
    for base in [0, block_len, 2 * block_len] {
        for offset in [split - 1, split, split + 1, block_len - 1] {
            lengths.push(base + offset);
        }
        lengths.push(base + block_len);
    }
    lengths
}

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn md5_around_56_and_64() {
    for len in boundary_lengths(64, 8) {
        let data = patterned(len);
        assert_eq!(
            Md5::digest(&data).as_slice(),
            md5::Md5::digest(&data).as_slice(),
            "length {len}"
        );
    }
}

#[test]
fn sha1_around_56_and_64() {
    for len in boundary_lengths(64, 8) {
        let data = patterned(len);
        assert_eq!(
            Sha1::digest(&data).as_slice(),
            sha1::Sha1::digest(&data).as_slice(),
            "length {len}"
        );
    }
}

#[test]
fn sha256_around_56_and_64() {
    for len in boundary_lengths(64, 8) {
        let data = patterned(len);
        assert_eq!(
            Sha256::digest(&data).as_slice(),
            sha2::Sha256::digest(&data).as_slice(),
            "length {len}"
        );
    }
}

#[test]
fn sha512_around_112_and_128() {
    for len in boundary_lengths(128, 16) {
        let data = patterned(len);
        assert_eq!(
            Sha512::digest(&data).as_slice(),
            sha2::Sha512::digest(&data).as_slice(),
            "length {len}"
        );
    }
}

#[test]
fn split_point_inside_padding_region() {
    // Feed everything except the last byte, then the last byte alone, so the
    // final update lands exactly on the padding split.
    for algorithm in Algorithm::ALL {
        let block = algorithm.block_len();
        let length_field = if block == 128 { 16 } else { 8 };
        for len in boundary_lengths(block, length_field) {
            let data = patterned(len);
            let mut hasher = algorithm.hasher();
            if let Some((last, head)) = data.split_last() {
                hasher.update(head);
                hasher.update(&[*last]);
            }
            assert_eq!(
                hasher.finalize(),
                algorithm.digest(&data),
                "{algorithm} length {len}"
            );
        }
    }
}

#[test]
fn generic_driver_sees_block_sizes() {
    fn buffered_after<H: StreamingHash>(len: usize) -> usize {
        len % H::BLOCK_LEN
    }
    assert_eq!(buffered_after::<Md5>(56), 56);
    assert_eq!(buffered_after::<Sha512>(130), 2);
}
