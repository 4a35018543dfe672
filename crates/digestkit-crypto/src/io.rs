//! # File Digests and Verification
//!
//! Streams files through a runtime-selected algorithm and checks results
//! against expected digests.
//!
//! ## Integrity Invariant
//!
//! Verification compares digests in constant time, after checking that the
//! expected digest has the right length for the algorithm. A wrong-length
//! expected value is a caller error ([`DigestError::LengthMismatch`]), not a
//! failed verification.

use std::fs::File;
use std::path::Path;

use digestkit_core::{digest_reader, Digest, DigestError};

use crate::dispatch::DigestAlgorithm;

/// Digest the contents of the file at `path`.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the file cannot be opened or read.
pub fn digest_file(path: &Path, algorithm: DigestAlgorithm) -> Result<Digest, DigestError> {
    tracing::debug!(path = %path.display(), %algorithm, "digesting file");
    let file = File::open(path)?;
    let digest = digest_reader(file, algorithm.hasher())?;
    tracing::trace!(path = %path.display(), digest = %digest, "file digest computed");
    Ok(digest)
}

/// Compare a computed digest against an expected one in constant time.
///
/// # Errors
///
/// Returns [`DigestError::LengthMismatch`] if the two digests differ in
/// length; that indicates the expected value belongs to another algorithm.
pub fn verify_digest(computed: &Digest, expected: &Digest) -> Result<bool, DigestError> {
    if computed.len() != expected.len() {
        return Err(DigestError::LengthMismatch {
            expected: computed.len(),
            actual: expected.len(),
        });
    }
    Ok(computed.ct_eq(expected))
}

/// Digest the file at `path` and compare it against `expected`.
///
/// Returns `Ok(false)` on a mismatch.
///
/// # Errors
///
/// Returns [`DigestError::LengthMismatch`] if `expected` does not have the
/// algorithm's output length, or [`DigestError::Io`] if the file cannot be
/// read.
pub fn verify_file(
    path: &Path,
    algorithm: DigestAlgorithm,
    expected: &Digest,
) -> Result<bool, DigestError> {
    if expected.len() != algorithm.output_len() {
        return Err(DigestError::LengthMismatch {
            expected: algorithm.output_len(),
            actual: expected.len(),
        });
    }
    let computed = digest_file(path, algorithm)?;
    let matches = verify_digest(&computed, expected)?;
    if !matches {
        tracing::warn!(path = %path.display(), %algorithm, "digest mismatch");
    }
    Ok(matches)
}
