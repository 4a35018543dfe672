//! # Algorithm — One In-Progress Digest Computation
//!
//! An [`Algorithm`] value is the running state of a single digest. Work with
//! it directly when every copy matters; otherwise wrap it in a
//! [`DigestBuffer`](crate::DigestBuffer) or use the one-step
//! [`digest()`](crate::digest) helper.
//!
//! ## Value Semantics
//!
//! Implementations must be `Clone`, and a clone must be a fully independent
//! state. [`DigestBuffer::digest()`](crate::DigestBuffer::digest) relies on
//! this: it finishes a clone and leaves the original running.

/// A digest algorithm state.
pub trait Algorithm: Clone {
    /// Canonical lowercase algorithm name, e.g. `"sha256"`.
    fn name(&self) -> &'static str;

    /// Size of the finished digest in bytes.
    fn output_len(&self) -> usize;

    /// Absorb `data` into the running state.
    fn update(&mut self, data: &[u8]);

    /// Finish the computation and return the digest bytes.
    ///
    /// Consumes the state. The returned vector is exactly
    /// [`output_len()`](Algorithm::output_len) bytes long.
    fn finish(self) -> Vec<u8>;
}

