//! # Digest — Completed Digest Values
//!
//! Defines [`Digest`], the immutable result of a finished [`Algorithm`], and
//! [`Base64Options`] for its base64 renderings.
//!
//! ## Ordering
//!
//! Digests order by length first, then lexicographically by byte. A shorter
//! digest is always less than a longer one. This only matters when digests
//! from different algorithms are mixed in one collection.
//!
//! ## Wire Form
//!
//! `serde` serializes a digest as its lowercase hex string and accepts hex in
//! either case on input.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;

use crate::algorithm::Algorithm;
use crate::error::DigestError;

/// An immutable, completed digest.
///
/// Produced by [`DigestBuffer::digest()`](crate::DigestBuffer::digest), the
/// one-step helpers in [`convenience`](crate::convenience), or parsed from a
/// hex string. The raw bytes can be read in several encodings but never
/// modified.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes.
    ///
    /// Normally digests come from an algorithm; this is for digests received
    /// from elsewhere.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Finish `algorithm` and wrap its output.
    pub fn from_algorithm<A: Algorithm>(algorithm: A) -> Self {
        Self::from_bytes(algorithm.finish())
    }

    /// Parse a digest from a hex string.
    ///
    /// Surrounding whitespace is ignored and both upper- and lowercase hex
    /// digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Empty`] for an empty (or all-whitespace) string
    /// and [`DigestError::InvalidHex`] for odd-length or non-hex input.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DigestError::Empty);
        }
        let bytes = hex::decode(trimmed)?;
        Ok(Self { bytes })
    }

    /// The digest as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Digest size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the digest has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Render the digest as an uppercase hex string.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    /// Render the digest as base64 text.
    pub fn to_base64(&self, options: Base64Options) -> String {
        options.encode(&self.bytes)
    }

    /// The base64 rendering as ASCII bytes.
    pub fn base64_bytes(&self, options: Base64Options) -> Vec<u8> {
        self.to_base64(options).into_bytes()
    }

    /// Compare two digests in constant time.
    ///
    /// Use this instead of `==` when checking a computed digest against an
    /// expected value supplied by someone else.
    pub fn ct_eq(&self, other: &Digest) -> bool {
        bool::from(self.bytes.as_slice().ct_eq(other.bytes.as_slice()))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Ord for Digest {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes
            .len()
            .cmp(&other.bytes.len())
            .then_with(|| self.bytes.cmp(&other.bytes))
    }
}

impl PartialOrd for Digest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hashes the first (at most) eight bytes as one `u64`.
///
/// Cryptographic digest bytes are uniformly distributed, so a prefix is as
/// good a hash key as the whole value. Equal digests share a prefix, so this
/// is consistent with `Eq`.
impl Hash for Digest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let prefix = self
            .bytes
            .iter()
            .take(8)
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        state.write_u64(prefix);
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_upper())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Base64 rendering
// ---------------------------------------------------------------------------

/// Maximum base64 line length when wrapping is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineLength {
    /// Wrap after 64 characters (PEM style).
    Chars64,
    /// Wrap after 76 characters (MIME style).
    Chars76,
}

impl LineLength {
    /// Number of characters per full line.
    pub fn chars(self) -> usize {
        match self {
            Self::Chars64 => 64,
            Self::Chars76 => 76,
        }
    }

    /// Map a character count to a supported line length.
    pub fn from_chars(chars: usize) -> Option<Self> {
        match chars {
            64 => Some(Self::Chars64),
            76 => Some(Self::Chars76),
            _ => None,
        }
    }
}

/// Separator inserted between wrapped base64 lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// Carriage return followed by line feed.
    #[default]
    CrLf,
    /// Carriage return only.
    Cr,
    /// Line feed only.
    Lf,
}

impl LineEnding {
    /// The separator characters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::Lf => "\n",
        }
    }
}

/// How a digest is rendered as base64.
///
/// The default is a single unwrapped line using the standard alphabet with
/// padding. With wrapping enabled, the line ending is placed between lines
/// only; the output never ends with a line ending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base64Options {
    line_length: Option<LineLength>,
    line_ending: LineEnding,
    url_safe: bool,
}

impl Base64Options {
    /// Single line, standard alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap output lines at `length` characters.
    pub fn wrap(mut self, length: LineLength) -> Self {
        self.line_length = Some(length);
        self
    }

    /// Use `ending` between wrapped lines. Has no effect without
    /// [`wrap()`](Base64Options::wrap).
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// Use the URL- and filename-safe alphabet (`-` and `_`).
    pub fn url_safe(mut self) -> Self {
        self.url_safe = true;
        self
    }

    /// The configured wrap length, if any.
    pub fn line_length(&self) -> Option<LineLength> {
        self.line_length
    }

    fn encode(&self, bytes: &[u8]) -> String {
        let config = if self.url_safe {
            base64::URL_SAFE
        } else {
            base64::STANDARD
        };
        let encoded = base64::encode_config(bytes, config);

        let Some(length) = self.line_length else {
            return encoded;
        };
        let width = length.chars();
        let separator = self.line_ending.as_str();
        let mut wrapped =
            String::with_capacity(encoded.len() + (encoded.len() / width) * separator.len());
        for (i, ch) in encoded.chars().enumerate() {
            if i > 0 && i % width == 0 {
                wrapped.push_str(separator);
            }
            wrapped.push(ch);
        }
        wrapped
    }
}
