//! Hashing many independent inputs at once.
//!
//! Each input gets its own engine, so no hasher is ever shared between
//! threads. With the `parallel` feature the inputs are spread over the rayon
//! thread pool; without it they are hashed in order on the calling thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algorithm::{Algorithm, Digest};
use crate::hash::StreamingHash;

/// Computes one digest per input, in input order.
///
/// # Examples
///
/// ```
/// use digests::{Sha1, digest_batch};
///
/// let inputs = [b"input1".as_slice(), b"input2", b"input3"];
/// let digests = digest_batch::<Sha1, _>(&inputs);
///
/// assert_eq!(digests.len(), 3);
/// assert_eq!(digests[1], Sha1::digest(b"input2"));
/// ```
pub fn digest_batch<H, T>(inputs: &[T]) -> Vec<H::Digest>
where
    H: StreamingHash,
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        inputs.par_iter().map(|input| H::digest(input.as_ref())).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().map(|input| H::digest(input.as_ref())).collect()
    }
}

impl Algorithm {
    /// Computes one digest per input with this algorithm, in input order.
    pub fn digest_batch<T>(self, inputs: &[T]) -> Vec<Digest>
    where
        T: AsRef<[u8]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            inputs
                .par_iter()
                .map(|input| self.digest(input.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(|input| self.digest(input.as_ref())).collect()
        }
    }
}
