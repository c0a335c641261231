use super::*;
use crate::{Md5, Sha1, Sha256, Sha512};

use proptest::prelude::*;

fn chunked_sequences() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=300), 1..=8)
}

fn digest_chunks<C: Compression>(chunks: &[Vec<u8>]) -> (C::Output, C::Output) {
    let mut streamed = Engine::<C>::new();
    let mut whole = Vec::new();
    for chunk in chunks {
        streamed.update(chunk);
        assert_eq!(streamed.len(), whole.len() as u128 + chunk.len() as u128);
        whole.extend_from_slice(chunk);
        assert_eq!(
            streamed.buffered_len(),
            whole.len() % C::BLOCK_LEN,
            "buffer must hold exactly the partial tail"
        );
    }
    (streamed.finalize(), Engine::<C>::digest(&whole))
}

proptest! {
    #[test]
    fn md5_chunking_does_not_change_digest(chunks in chunked_sequences()) {
        let (streamed, whole) = digest_chunks::<crate::md5::Md5Core>(&chunks);
        prop_assert_eq!(streamed, whole);
    }

    #[test]
    fn sha1_chunking_does_not_change_digest(chunks in chunked_sequences()) {
        let (streamed, whole) = digest_chunks::<crate::sha1::Sha1Core>(&chunks);
        prop_assert_eq!(streamed, whole);
    }

    #[test]
    fn sha256_chunking_does_not_change_digest(chunks in chunked_sequences()) {
        let (streamed, whole) = digest_chunks::<crate::sha256::Sha256Core>(&chunks);
        prop_assert_eq!(streamed, whole);
    }

    #[test]
    fn sha512_chunking_does_not_change_digest(chunks in chunked_sequences()) {
        let (streamed, whole) = digest_chunks::<crate::sha512::Sha512Core>(&chunks);
        prop_assert_eq!(streamed, whole);
    }
}

#[test]
fn new_engine_is_empty() {
    let engine = Sha256::new();
    assert!(engine.is_empty());
    assert_eq!(engine.len(), 0);
    assert_eq!(engine.buffered_len(), 0);
}

#[test]
fn empty_update_only_keeps_counter() {
    let mut engine = Md5::new();
    engine.update(b"");
    assert!(engine.is_empty());
    assert_eq!(engine.finalize(), Md5::digest(b""));
}

#[test]
fn finalize_resets_engine() {
    let mut engine = Sha1::new();
    engine.update(b"first message");
    let _ = engine.finalize();

    assert!(engine.is_empty());
    engine.update(b"second message");
    assert_eq!(engine.finalize(), Sha1::digest(b"second message"));
}

#[test]
fn reset_discards_buffered_input() {
    let mut engine = Sha512::new();
    engine.update(&[0x5a; 200]);
    engine.reset();
    assert_eq!(engine.len(), 0);
    assert_eq!(engine.finalize(), Sha512::digest(b""));
}

#[test]
fn reset_is_idempotent() {
    let mut engine = Md5::new();
    engine.reset();
    engine.reset();
    assert_eq!(engine.finalize(), Md5::digest(b""));
}

#[test]
fn clone_forks_independent_streams() {
    let mut base = Sha256::new();
    base.update(b"shared prefix ");

    let mut left = base.clone();
    let mut right = base;
    left.update(b"left");
    right.update(b"right");

    assert_eq!(left.finalize(), Sha256::digest(b"shared prefix left"));
    assert_eq!(right.finalize(), Sha256::digest(b"shared prefix right"));
}

#[test]
fn update_order_matters() {
    let mut ab = Sha1::new();
    ab.update(b"a");
    ab.update(b"b");

    let mut ba = Sha1::new();
    ba.update(b"b");
    ba.update(b"a");

    assert_ne!(ab.finalize(), ba.finalize());
}

#[test]
fn top_up_exactly_fills_buffer() {
    let data = [0x11u8; 64];
    let mut engine = Sha256::new();
    engine.update(&data[..10]);
    engine.update(&data[10..]);
    assert_eq!(engine.buffered_len(), 0);
    assert_eq!(engine.finalize(), Sha256::digest(&data));
}

#[test]
fn top_up_then_bulk_then_tail() {
    let data: Vec<u8> = (0..=255u8).cycle().take(64 * 5 + 7).collect();
    let mut engine = Md5::new();
    engine.update(&data[..3]);
    engine.update(&data[3..]);
    assert_eq!(engine.buffered_len(), 7);
    assert_eq!(engine.finalize(), Md5::digest(&data));
}

#[test]
fn write_trait_matches_update() {
    let mut engine = Sha512::new();
    io::copy(&mut &b"streamed through io::copy"[..], &mut engine).unwrap();
    engine.flush().unwrap();
    assert_eq!(engine.finalize(), Sha512::digest(b"streamed through io::copy"));
}

#[test]
fn update_reader_consumes_until_eof() {
    let data = vec![0xa5u8; 3 * Sha1::DEFAULT_READER_BUFFER_LEN + 17];
    let mut engine = Sha1::new();
    let read = engine.update_reader(&mut &data[..]).unwrap();
    assert_eq!(read, data.len() as u64);
    assert_eq!(engine.finalize(), Sha1::digest(&data));
}

#[test]
fn update_reader_with_small_buffer() {
    let data = b"small buffer forces many reads across block boundaries";
    let mut engine = Sha256::new();
    let mut buffer = [0u8; 5];
    let read = engine
        .update_reader_with_buffer(&mut &data[..], &mut buffer)
        .unwrap();
    assert_eq!(read, data.len() as u64);
    assert_eq!(engine.finalize(), Sha256::digest(data));
}

#[test]
fn empty_reader_buffer_is_rejected() {
    let mut engine = Md5::new();
    let mut rdr = &b"data"[..];
    let mut buf: [u8; 0] = [];
    let err = engine
        .update_reader_with_buffer(&mut rdr, &mut buf)
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(engine.is_empty());
}

struct InterruptOnce<'a> {
    data: &'a [u8],
    interrupted: bool,
}

impl Read for InterruptOnce<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.data.read(buf)
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let mut reader = InterruptOnce {
        data: b"retry me",
        interrupted: false,
    };
    let mut engine = Sha256::new();
    assert_eq!(engine.update_reader(&mut reader).unwrap(), 8);
    assert_eq!(engine.finalize(), Sha256::digest(b"retry me"));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

#[test]
fn reader_errors_propagate() {
    let mut engine = Sha512::new();
    let err = engine.update_reader(&mut FailingReader).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

#[test]
fn debug_output_names_algorithm() {
    let mut engine = Sha1::new();
    engine.update(b"abc");
    let rendered = format!("{engine:?}");
    assert!(rendered.contains("SHA-1"));
    assert!(rendered.contains("len: 3"));
}
