//! # One-Step Digests
//!
//! Helpers for the common case: digest some input and get a [`Digest`] back
//! without managing a [`DigestBuffer`] by hand.

use std::io::{self, Read};

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::buffer::DigestBuffer;
use crate::canonical::CanonicalBytes;
use crate::digest::Digest;
use crate::digestible::Digestible;
use crate::error::DigestError;

/// Chunk size used when streaming from a reader.
const READ_CHUNK: usize = 64 * 1024;

/// Digest a single piece of data.
pub fn digest<A, D>(data: &D, algorithm: A) -> Digest
where
    A: Algorithm,
    D: Digestible + ?Sized,
{
    let mut buffer = DigestBuffer::new(algorithm);
    buffer.append(data);
    buffer.finish()
}

/// Digest a sequence of items as if they were concatenated.
pub fn digest_all<A, I>(items: I, algorithm: A) -> Digest
where
    A: Algorithm,
    I: IntoIterator,
    I::Item: Digestible,
{
    let mut buffer = DigestBuffer::new(algorithm);
    buffer.append_all(items);
    buffer.finish()
}

/// Digest everything `reader` yields, reading in 64 KiB chunks.
///
/// Interrupted reads are retried; any other read error is returned.
pub fn digest_reader<A, R>(mut reader: R, algorithm: A) -> io::Result<Digest>
where
    A: Algorithm,
    R: Read,
{
    let mut buffer = DigestBuffer::new(algorithm);
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.append_bytes(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(buffer.finish())
}

/// Digest the canonical bytes of a serializable value.
///
/// # Errors
///
/// Returns [`DigestError::Canonicalization`] if the value cannot be
/// canonicalized (for example, it contains a float).
pub fn digest_value<A, T>(value: &T, algorithm: A) -> Result<Digest, DigestError>
where
    A: Algorithm,
    T: Serialize + ?Sized,
{
    let canonical = CanonicalBytes::new(value)?;
    Ok(digest(&canonical, algorithm))
}
