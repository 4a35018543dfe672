//! # DigestBuffer — Streaming Digest Accumulator
//!
//! A [`DigestBuffer`] wraps one [`Algorithm`] state. Append data in any
//! [`Digestible`] form, then read a [`Digest`] at any point. Reading does not
//! end the stream: [`DigestBuffer::digest()`] finishes a clone of the state,
//! so more data can be appended afterwards and the next digest covers
//! everything appended so far.
//!
//! ## Copies Are Independent
//!
//! Cloning a buffer clones the algorithm state. Appending to the clone never
//! affects the original, which makes it cheap to digest several messages that
//! share a prefix.
//!
//! ## Sinks
//!
//! The buffer also implements `Extend<u8>` and [`std::io::Write`], so it can
//! be the target of iterator collection or `std::io::copy`.

use std::fmt;
use std::io;
use std::ops::{Add, AddAssign};

use crate::algorithm::Algorithm;
use crate::digest::Digest;
use crate::digestible::Digestible;

/// An in-progress digest.
#[derive(Clone, Default)]
pub struct DigestBuffer<A: Algorithm> {
    algorithm: A,
    length: u64,
}

impl<A: Algorithm> DigestBuffer<A> {
    /// Create a buffer that feeds into `algorithm`.
    pub fn new(algorithm: A) -> Self {
        Self {
            algorithm,
            length: 0,
        }
    }

    /// Append raw bytes.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.algorithm.update(bytes);
        self.length += bytes.len() as u64;
    }

    /// Append the bytes of any digestible value.
    pub fn append<D: Digestible + ?Sized>(&mut self, data: &D) {
        data.feed(&mut |chunk| self.append_bytes(chunk));
    }

    /// Append each item in order. Lazy iterators are consumed one item at a
    /// time.
    pub fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Digestible,
    {
        for item in items {
            self.append(&item);
        }
    }

    /// The digest of everything appended so far.
    ///
    /// Computed on a copy of the state; the buffer stays usable.
    pub fn digest(&self) -> Digest {
        Digest::from_algorithm(self.algorithm.clone())
    }

    /// Consume the buffer and return the final digest.
    pub fn finish(self) -> Digest {
        Digest::from_algorithm(self.algorithm)
    }

    /// Number of bytes appended so far.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The underlying algorithm state.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }
}

impl<A: Algorithm> fmt::Debug for DigestBuffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestBuffer")
            .field("algorithm", &self.algorithm.name())
            .field("length", &self.length)
            .finish()
    }
}

impl<A: Algorithm, D: Digestible> AddAssign<D> for DigestBuffer<A> {
    fn add_assign(&mut self, data: D) {
        self.append(&data);
    }
}

impl<A: Algorithm, D: Digestible> Add<D> for DigestBuffer<A> {
    type Output = Self;

    fn add(mut self, data: D) -> Self {
        self.append(&data);
        self
    }
}

impl<A: Algorithm> Extend<u8> for DigestBuffer<A> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.append_bytes(&[byte]);
        }
    }
}

impl<'a, A: Algorithm> Extend<&'a u8> for DigestBuffer<A> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<A: Algorithm> io::Write for DigestBuffer<A> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
