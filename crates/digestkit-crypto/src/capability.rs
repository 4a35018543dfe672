//! # Capability Sets — Which Algorithms a Caller Accepts
//!
//! An [`AlgorithmSet`] is the set of algorithms a caller is willing to use.
//! Dispatch always goes through a set: [`AlgorithmSet::select()`] checks an
//! explicit request, [`AlgorithmSet::preferred()`] picks a default, and
//! [`AlgorithmSet::for_output_len()`] infers the algorithm behind a bare hex
//! digest.
//!
//! ## Preference Order
//!
//! When more than one member fits, the earliest entry of [`PREFERENCE`] wins.
//! SHA-256 comes first because it is the most widely deployed; SHA-1 comes
//! last.

use std::fmt;
use std::str::FromStr;

use digestkit_core::DigestError;
use serde::{Deserialize, Serialize};

use crate::dispatch::{DigestAlgorithm, DIGEST_ALGORITHM_COUNT};

/// Fixed tie-break order used by [`AlgorithmSet::preferred()`] and
/// [`AlgorithmSet::for_output_len()`].
pub const PREFERENCE: [DigestAlgorithm; DIGEST_ALGORITHM_COUNT] = [
    DigestAlgorithm::Sha256,
    DigestAlgorithm::Sha512,
    DigestAlgorithm::Sha384,
    DigestAlgorithm::Sha3_256,
    DigestAlgorithm::Sha3_512,
    DigestAlgorithm::Sha3_384,
    DigestAlgorithm::Sha512_256,
    DigestAlgorithm::Sha224,
    DigestAlgorithm::Sha3_224,
    DigestAlgorithm::Sha1,
];

/// A set of digest algorithms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DigestAlgorithm>", into = "Vec<DigestAlgorithm>")]
pub struct AlgorithmSet(u16);

fn bit(algorithm: DigestAlgorithm) -> u16 {
    1 << (algorithm as u16)
}

impl AlgorithmSet {
    /// The empty set.
    pub const EMPTY: AlgorithmSet = AlgorithmSet(0);

    /// Every supported algorithm.
    pub fn all() -> Self {
        DigestAlgorithm::ALL.into_iter().collect()
    }

    /// Every supported algorithm except legacy ones (SHA-1).
    pub fn modern() -> Self {
        DigestAlgorithm::ALL
            .into_iter()
            .filter(|a| !a.is_legacy())
            .collect()
    }

    /// A set with exactly one member.
    pub fn only(algorithm: DigestAlgorithm) -> Self {
        Self(bit(algorithm))
    }

    /// Add `algorithm` to the set.
    pub fn insert(&mut self, algorithm: DigestAlgorithm) {
        self.0 |= bit(algorithm);
    }

    /// Remove `algorithm` from the set.
    pub fn remove(&mut self, algorithm: DigestAlgorithm) {
        self.0 &= !bit(algorithm);
    }

    /// This set plus `algorithm`.
    pub fn with(mut self, algorithm: DigestAlgorithm) -> Self {
        self.insert(algorithm);
        self
    }

    /// This set minus `algorithm`.
    pub fn without(mut self, algorithm: DigestAlgorithm) -> Self {
        self.remove(algorithm);
        self
    }

    /// Returns true if `algorithm` is a member.
    pub fn contains(&self, algorithm: DigestAlgorithm) -> bool {
        self.0 & bit(algorithm) != 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members of either set.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Members of both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = DigestAlgorithm> + '_ {
        DigestAlgorithm::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
    }

    /// The preferred member, or `None` for the empty set.
    pub fn preferred(&self) -> Option<DigestAlgorithm> {
        PREFERENCE.into_iter().find(|a| self.contains(*a))
    }

    /// The preferred member producing `len`-byte digests.
    pub fn for_output_len(&self, len: usize) -> Option<DigestAlgorithm> {
        PREFERENCE
            .into_iter()
            .find(|a| self.contains(*a) && a.output_len() == len)
    }

    /// Accept `algorithm` if it is a member.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::AlgorithmNotAllowed`] otherwise.
    pub fn select(&self, algorithm: DigestAlgorithm) -> Result<DigestAlgorithm, DigestError> {
        if self.contains(algorithm) {
            Ok(algorithm)
        } else {
            Err(DigestError::AlgorithmNotAllowed(algorithm.to_string()))
        }
    }
}

impl FromIterator<DigestAlgorithm> for AlgorithmSet {
    fn from_iter<I: IntoIterator<Item = DigestAlgorithm>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for algorithm in iter {
            set.insert(algorithm);
        }
        set
    }
}

impl Extend<DigestAlgorithm> for AlgorithmSet {
    fn extend<I: IntoIterator<Item = DigestAlgorithm>>(&mut self, iter: I) {
        for algorithm in iter {
            self.insert(algorithm);
        }
    }
}

impl From<Vec<DigestAlgorithm>> for AlgorithmSet {
    fn from(algorithms: Vec<DigestAlgorithm>) -> Self {
        algorithms.into_iter().collect()
    }
}

impl From<AlgorithmSet> for Vec<DigestAlgorithm> {
    fn from(set: AlgorithmSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for AlgorithmSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma-separated canonical names, e.g. `sha256,sha512`.
impl fmt::Display for AlgorithmSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, algorithm) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(algorithm.as_str())?;
        }
        Ok(())
    }
}

/// Parses a comma-separated list of algorithm names. The keywords `all` and
/// `modern` expand to [`AlgorithmSet::all()`] and [`AlgorithmSet::modern()`].
/// Empty entries are skipped.
impl FromStr for AlgorithmSet {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::EMPTY;
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.to_ascii_lowercase().as_str() {
                "all" => set = set.union(Self::all()),
                "modern" => set = set.union(Self::modern()),
                _ => set.insert(entry.parse()?),
            }
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_modern() {
        assert_eq!(AlgorithmSet::all().len(), DIGEST_ALGORITHM_COUNT);
        let modern = AlgorithmSet::modern();
        assert_eq!(modern.len(), DIGEST_ALGORITHM_COUNT - 1);
        assert!(!modern.contains(DigestAlgorithm::Sha1));
        assert!(modern.contains(DigestAlgorithm::Sha256));
    }

    #[test]
    fn test_preference_covers_every_algorithm() {
        let from_preference: AlgorithmSet = PREFERENCE.into_iter().collect();
        assert_eq!(from_preference, AlgorithmSet::all());
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = AlgorithmSet::EMPTY;
        assert!(set.is_empty());
        set.insert(DigestAlgorithm::Sha384);
        set.insert(DigestAlgorithm::Sha384);
        assert_eq!(set.len(), 1);
        assert!(set.contains(DigestAlgorithm::Sha384));
        set.remove(DigestAlgorithm::Sha384);
        assert!(set.is_empty());
    }

    #[test]
    fn test_preferred_follows_preference_order() {
        assert_eq!(AlgorithmSet::all().preferred(), Some(DigestAlgorithm::Sha256));
        let set = AlgorithmSet::only(DigestAlgorithm::Sha1).with(DigestAlgorithm::Sha3_224);
        assert_eq!(set.preferred(), Some(DigestAlgorithm::Sha3_224));
        assert_eq!(AlgorithmSet::EMPTY.preferred(), None);
    }

    #[test]
    fn test_for_output_len_resolves_ambiguity_by_preference() {
        let all = AlgorithmSet::all();
        assert_eq!(all.for_output_len(32), Some(DigestAlgorithm::Sha256));
        assert_eq!(all.for_output_len(20), Some(DigestAlgorithm::Sha1));
        assert_eq!(all.for_output_len(64), Some(DigestAlgorithm::Sha512));
        assert_eq!(all.for_output_len(28), Some(DigestAlgorithm::Sha224));
        assert_eq!(all.for_output_len(16), None);

        let sha3_only = AlgorithmSet::only(DigestAlgorithm::Sha3_256);
        assert_eq!(sha3_only.for_output_len(32), Some(DigestAlgorithm::Sha3_256));
        assert_eq!(AlgorithmSet::modern().for_output_len(20), None);
    }

    #[test]
    fn test_select_enforces_membership() {
        let modern = AlgorithmSet::modern();
        assert_eq!(
            modern.select(DigestAlgorithm::Sha512).unwrap(),
            DigestAlgorithm::Sha512
        );
        match modern.select(DigestAlgorithm::Sha1) {
            Err(DigestError::AlgorithmNotAllowed(name)) => assert_eq!(name, "sha1"),
            other => panic!("expected AlgorithmNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn test_union_and_intersection() {
        let a = AlgorithmSet::only(DigestAlgorithm::Sha256).with(DigestAlgorithm::Sha512);
        let b = AlgorithmSet::only(DigestAlgorithm::Sha512).with(DigestAlgorithm::Sha1);
        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.intersection(b), AlgorithmSet::only(DigestAlgorithm::Sha512));
    }

    #[test]
    fn test_iter_is_declaration_order() {
        let set = AlgorithmSet::only(DigestAlgorithm::Sha3_512).with(DigestAlgorithm::Sha1);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![DigestAlgorithm::Sha1, DigestAlgorithm::Sha3_512]);
    }

    #[test]
    fn test_parse_names_and_keywords() {
        let set: AlgorithmSet = "sha256, SHA-512".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(DigestAlgorithm::Sha512));

        assert_eq!("all".parse::<AlgorithmSet>().unwrap(), AlgorithmSet::all());
        assert_eq!(
            "modern,sha1".parse::<AlgorithmSet>().unwrap(),
            AlgorithmSet::all()
        );
        assert_eq!("".parse::<AlgorithmSet>().unwrap(), AlgorithmSet::EMPTY);
        assert!("sha256,md5".parse::<AlgorithmSet>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let set = AlgorithmSet::only(DigestAlgorithm::Sha512_256).with(DigestAlgorithm::Sha224);
        assert_eq!(set.to_string(), "sha224,sha512-256");
        assert_eq!(set.to_string().parse::<AlgorithmSet>().unwrap(), set);
    }

    #[test]
    fn test_serde_as_name_list() {
        let set = AlgorithmSet::only(DigestAlgorithm::Sha256).with(DigestAlgorithm::Sha3_256);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["sha256","sha3-256"]"#);
        let back: AlgorithmSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
