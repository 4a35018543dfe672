//! # digestkit-crypto — Digest Algorithms and Dispatch
//!
//! Provides the concrete [`Algorithm`](digestkit_core::Algorithm)
//! implementations and the layer that selects between them at run time:
//!
//! - **FIPS 180-4** — [`Sha1`], [`Sha224`], [`Sha256`], [`Sha384`],
//!   [`Sha512`], [`Sha512_256`].
//! - **FIPS 202** — [`Sha3_224`], [`Sha3_256`], [`Sha3_384`], [`Sha3_512`].
//! - **Dispatch** — [`DigestAlgorithm`] names an algorithm and
//!   [`AnyAlgorithm`] is a state chosen at run time.
//! - **Capability sets** — [`AlgorithmSet`] restricts which algorithms a
//!   caller accepts and picks the preferred one.
//! - **Files** — [`digest_file()`] and [`verify_file()`].
//!
//! ## Crate Policy
//!
//! - No hand-written compression functions. The bit-exact transforms come
//!   from the RustCrypto `sha1`, `sha2` and `sha3` crates.
//! - SHA-1 is supported for interoperability only and is excluded from
//!   [`AlgorithmSet::modern()`].

#[macro_use]
mod macros;

pub mod capability;
pub mod dispatch;
pub mod io;
pub mod keccak;
pub mod secure_hash;

// Re-export primary types.
pub use capability::AlgorithmSet;
pub use dispatch::{AnyAlgorithm, DigestAlgorithm};
pub use io::{digest_file, verify_digest, verify_file};
pub use keccak::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
pub use secure_hash::{Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_256};
