//! # Digestible — Inputs That Can Be Part of a Digest
//!
//! [`Digestible`] is implemented for the types whose byte representation is
//! unambiguous: byte slices and vectors, UTF-8 strings, single bytes, and the
//! crate's own [`Digest`] and [`CanonicalBytes`].
//!
//! Multi-byte integers are intentionally not digestible. Their in-memory
//! layout depends on the machine, so digesting them directly would produce
//! different digests on different hosts. Convert them with `to_be_bytes()`
//! (or `to_le_bytes()`) and digest the array instead.

use std::borrow::Cow;

use crate::canonical::CanonicalBytes;
use crate::digest::Digest;

/// A value that can contribute bytes to a digest.
///
/// `feed` hands the value's bytes to `sink`, in one or more slices. The
/// concatenation of those slices is what gets digested. The trait is object
/// safe, so heterogeneous inputs can be collected as `&dyn Digestible`.
pub trait Digestible {
    /// Pass this value's bytes to `sink`.
    fn feed(&self, sink: &mut dyn FnMut(&[u8]));
}

impl Digestible for [u8] {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self)
    }
}

impl<const N: usize> Digestible for [u8; N] {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self)
    }
}

impl Digestible for Vec<u8> {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self)
    }
}

/// Strings contribute their UTF-8 bytes with no normalization. Normalize
/// first (or digest explicit bytes) if canonically-equivalent strings must
/// produce the same digest.
impl Digestible for str {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl Digestible for String {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl Digestible for u8 {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(std::slice::from_ref(self))
    }
}

impl Digestible for Digest {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl Digestible for CanonicalBytes {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl<T: Digestible + ?Sized> Digestible for &T {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        (**self).feed(sink)
    }
}

impl<T: Digestible + ?Sized> Digestible for Box<T> {
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        (**self).feed(sink)
    }
}

impl<T> Digestible for Cow<'_, T>
where
    T: Digestible + ToOwned + ?Sized,
{
    fn feed(&self, sink: &mut dyn FnMut(&[u8])) {
        self.as_ref().feed(sink)
    }
}
