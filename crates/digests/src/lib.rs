#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod batch;
pub mod engine;
mod hash;
mod md5;
mod sha1;
mod sha256;
mod sha512;
mod words;

pub use algorithm::{Algorithm, Digest, DynHasher, MAX_DIGEST_LEN, UnknownAlgorithm};
pub use batch::digest_batch;
pub use engine::{Compression, Engine};
pub use hash::StreamingHash;
pub use md5::{Md5, Md5Core};
pub use sha1::{Sha1, Sha1Core};
pub use sha256::{Sha224, Sha224Core, Sha256, Sha256Core};
pub use sha512::{Sha384, Sha384Core, Sha512, Sha512Core};
pub use words::ByteOrder;
