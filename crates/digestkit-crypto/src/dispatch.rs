//! # Algorithm Dispatch — Selecting a Digest at Run Time
//!
//! [`DigestAlgorithm`] is the single list of supported algorithms. Every
//! `match` on it is exhaustive, so adding an algorithm forces the name table,
//! the size table and [`AnyAlgorithm`] to be updated together.
//!
//! [`AnyAlgorithm`] is the state of a digest whose algorithm was chosen at run
//! time (from configuration, a command-line flag or a checksum file). It
//! implements [`Algorithm`], so it works with
//! [`DigestBuffer`](digestkit_core::DigestBuffer) like any concrete type.

use std::fmt;
use std::str::FromStr;

use digestkit_core::{Algorithm, Digest, DigestError, Digestible};
use serde::{Deserialize, Serialize};

use crate::keccak::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use crate::secure_hash::{Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_256};

/// Every supported digest algorithm.
///
/// | Algorithm | Standard | Bytes | Collision bits |
/// |-----------|----------|-------|----------------|
/// | SHA-1 | FIPS 180-4 | 20 | broken |
/// | SHA-224 | FIPS 180-4 | 28 | 112 |
/// | SHA-256 | FIPS 180-4 | 32 | 128 |
/// | SHA-384 | FIPS 180-4 | 48 | 192 |
/// | SHA-512 | FIPS 180-4 | 64 | 256 |
/// | SHA-512/256 | FIPS 180-4 | 32 | 128 |
/// | SHA3-224 | FIPS 202 | 28 | 112 |
/// | SHA3-256 | FIPS 202 | 32 | 128 |
/// | SHA3-384 | FIPS 202 | 48 | 192 |
/// | SHA3-512 | FIPS 202 | 64 | 256 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum DigestAlgorithm {
    /// SHA-1. Legacy.
    #[serde(rename = "sha1")]
    Sha1,
    /// SHA-224.
    #[serde(rename = "sha224")]
    Sha224,
    /// SHA-256.
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384.
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512.
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA-512/256.
    #[serde(rename = "sha512-256")]
    Sha512_256,
    /// SHA3-224.
    #[serde(rename = "sha3-224")]
    Sha3_224,
    /// SHA3-256.
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-384.
    #[serde(rename = "sha3-384")]
    Sha3_384,
    /// SHA3-512.
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

/// Number of supported algorithms.
pub const DIGEST_ALGORITHM_COUNT: usize = 10;

impl DigestAlgorithm {
    /// All algorithms in declaration order.
    pub const ALL: [DigestAlgorithm; DIGEST_ALGORITHM_COUNT] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_256 => "sha512-256",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        }
    }

    /// Upper-case tag used in BSD-style checksum lines (`SHA256 (file) = ...`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha512_256 => "SHA512-256",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => Sha1::OUTPUT_LEN,
            Self::Sha224 => Sha224::OUTPUT_LEN,
            Self::Sha256 => Sha256::OUTPUT_LEN,
            Self::Sha384 => Sha384::OUTPUT_LEN,
            Self::Sha512 => Sha512::OUTPUT_LEN,
            Self::Sha512_256 => Sha512_256::OUTPUT_LEN,
            Self::Sha3_224 => Sha3_224::OUTPUT_LEN,
            Self::Sha3_256 => Sha3_256::OUTPUT_LEN,
            Self::Sha3_384 => Sha3_384::OUTPUT_LEN,
            Self::Sha3_512 => Sha3_512::OUTPUT_LEN,
        }
    }

    /// Collision resistance in bits. Zero for SHA-1, which has practical
    /// collisions.
    pub fn security_bits(&self) -> u32 {
        match self {
            Self::Sha1 => 0,
            other => (other.output_len() * 4) as u32,
        }
    }

    /// Returns true for algorithms kept only for interoperability.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Sha1)
    }

    /// Start a new computation with this algorithm.
    pub fn hasher(&self) -> AnyAlgorithm {
        AnyAlgorithm::new(*self)
    }

    /// Digest `data` in one step.
    pub fn digest<D: Digestible + ?Sized>(&self, data: &D) -> Digest {
        digestkit_core::digest(data, self.hasher())
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses algorithm names case-insensitively, ignoring `-`, `_` and `/`
/// separators: `sha256`, `SHA-256`, `sha_256`, `SHA512/256` and `sha3-256`
/// are all accepted.
impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "sha512256" => Ok(Self::Sha512_256),
            "sha3224" => Ok(Self::Sha3_224),
            "sha3256" => Ok(Self::Sha3_256),
            "sha3384" => Ok(Self::Sha3_384),
            "sha3512" => Ok(Self::Sha3_512),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A digest state whose algorithm was chosen at run time.
#[derive(Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum AnyAlgorithm {
    /// SHA-1 state.
    Sha1(Sha1),
    /// SHA-224 state.
    Sha224(Sha224),
    /// SHA-256 state.
    Sha256(Sha256),
    /// SHA-384 state.
    Sha384(Sha384),
    /// SHA-512 state.
    Sha512(Sha512),
    /// SHA-512/256 state.
    Sha512_256(Sha512_256),
    /// SHA3-224 state.
    Sha3_224(Sha3_224),
    /// SHA3-256 state.
    Sha3_256(Sha3_256),
    /// SHA3-384 state.
    Sha3_384(Sha3_384),
    /// SHA3-512 state.
    Sha3_512(Sha3_512),
}

/// Forward a method call to whichever state is active.
macro_rules! dispatch {
    ($self:expr, $state:ident => $body:expr) => {
        match $self {
            AnyAlgorithm::Sha1($state) => $body,
            AnyAlgorithm::Sha224($state) => $body,
            AnyAlgorithm::Sha256($state) => $body,
            AnyAlgorithm::Sha384($state) => $body,
            AnyAlgorithm::Sha512($state) => $body,
            AnyAlgorithm::Sha512_256($state) => $body,
            AnyAlgorithm::Sha3_224($state) => $body,
            AnyAlgorithm::Sha3_256($state) => $body,
            AnyAlgorithm::Sha3_384($state) => $body,
            AnyAlgorithm::Sha3_512($state) => $body,
        }
    };
}

impl AnyAlgorithm {
    /// Start a new computation with `algorithm`.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha1 => Self::Sha1(Sha1::new()),
            DigestAlgorithm::Sha224 => Self::Sha224(Sha224::new()),
            DigestAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            DigestAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            DigestAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
            DigestAlgorithm::Sha512_256 => Self::Sha512_256(Sha512_256::new()),
            DigestAlgorithm::Sha3_224 => Self::Sha3_224(Sha3_224::new()),
            DigestAlgorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
            DigestAlgorithm::Sha3_384 => Self::Sha3_384(Sha3_384::new()),
            DigestAlgorithm::Sha3_512 => Self::Sha3_512(Sha3_512::new()),
        }
    }

    /// Which algorithm this state runs.
    pub fn kind(&self) -> DigestAlgorithm {
        match self {
            Self::Sha1(_) => DigestAlgorithm::Sha1,
            Self::Sha224(_) => DigestAlgorithm::Sha224,
            Self::Sha256(_) => DigestAlgorithm::Sha256,
            Self::Sha384(_) => DigestAlgorithm::Sha384,
            Self::Sha512(_) => DigestAlgorithm::Sha512,
            Self::Sha512_256(_) => DigestAlgorithm::Sha512_256,
            Self::Sha3_224(_) => DigestAlgorithm::Sha3_224,
            Self::Sha3_256(_) => DigestAlgorithm::Sha3_256,
            Self::Sha3_384(_) => DigestAlgorithm::Sha3_384,
            Self::Sha3_512(_) => DigestAlgorithm::Sha3_512,
        }
    }
}

impl From<DigestAlgorithm> for AnyAlgorithm {
    fn from(algorithm: DigestAlgorithm) -> Self {
        Self::new(algorithm)
    }
}

impl Algorithm for AnyAlgorithm {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn output_len(&self) -> usize {
        self.kind().output_len()
    }

    fn update(&mut self, data: &[u8]) {
        dispatch!(self, state => state.update(data))
    }

    fn finish(self) -> Vec<u8> {
        dispatch!(self, state => state.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_count_and_unique() {
        assert_eq!(DigestAlgorithm::ALL.len(), DIGEST_ALGORITHM_COUNT);
        let unique: HashSet<_> = DigestAlgorithm::ALL.iter().collect();
        assert_eq!(unique.len(), DIGEST_ALGORITHM_COUNT);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for algorithm in DigestAlgorithm::ALL {
            let parsed: DigestAlgorithm = algorithm.as_str().parse().unwrap_or_else(|e| {
                panic!("failed to parse {:?}: {e}", algorithm.as_str())
            });
            assert_eq!(algorithm, parsed);
        }
    }

    #[test]
    fn test_tag_roundtrip() {
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(algorithm.tag().parse::<DigestAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_from_str_accepts_common_spellings() {
        assert_eq!("SHA-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!("sha_256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!(
            "SHA512/256".parse::<DigestAlgorithm>().unwrap(),
            DigestAlgorithm::Sha512_256
        );
        assert_eq!("Sha3-512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha3_512);
        assert_eq!(" sha1 ".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
    }

    #[test]
    fn test_from_str_invalid() {
        for bad in ["", "md5", "sha", "sha257", "blake3"] {
            match bad.parse::<DigestAlgorithm>() {
                Err(DigestError::UnknownAlgorithm(name)) => assert_eq!(name, bad),
                other => panic!("expected UnknownAlgorithm for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_any_algorithm_matches_concrete_types() {
        assert_eq!(
            DigestAlgorithm::Sha256.digest("abc"),
            digestkit_core::digest("abc", Sha256::new())
        );
        assert_eq!(
            DigestAlgorithm::Sha3_384.digest("abc"),
            digestkit_core::digest("abc", Sha3_384::new())
        );
    }

    #[test]
    fn test_any_algorithm_reports_kind_and_sizes() {
        for algorithm in DigestAlgorithm::ALL {
            let hasher = algorithm.hasher();
            assert_eq!(hasher.kind(), algorithm);
            assert_eq!(hasher.name(), algorithm.as_str());
            assert_eq!(hasher.output_len(), algorithm.output_len());
            assert_eq!(hasher.finish().len(), algorithm.output_len());
        }
    }

    #[test]
    fn test_security_bits() {
        assert_eq!(DigestAlgorithm::Sha1.security_bits(), 0);
        assert_eq!(DigestAlgorithm::Sha256.security_bits(), 128);
        assert_eq!(DigestAlgorithm::Sha512.security_bits(), 256);
        assert_eq!(DigestAlgorithm::Sha3_224.security_bits(), 112);
        assert!(DigestAlgorithm::Sha1.is_legacy());
        assert!(!DigestAlgorithm::Sha224.is_legacy());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        for algorithm in DigestAlgorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.as_str()));
            let back: DigestAlgorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algorithm);
        }
    }
}
