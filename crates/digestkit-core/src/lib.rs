#![deny(missing_docs)]

//! # digestkit-core — Algorithm-Agnostic Digest Types
//!
//! This crate defines the types every digest computation in the workspace
//! flows through. It contains no hash implementations of its own; concrete
//! algorithms live in `digestkit-crypto` and plug in through the
//! [`Algorithm`] trait.
//!
//! ## Design Principles
//!
//! 1. **[`Algorithm`] values have value semantics.** Every algorithm state is
//!    `Clone`, and a clone is an independent computation. This is what allows
//!    a [`DigestBuffer`] to be copied mid-stream, and to hand out a
//!    [`Digest`] without ending the stream.
//!
//! 2. **`finish()` consumes the state.** Calling into a finished algorithm is
//!    a compile error rather than a documented hazard.
//!
//! 3. **[`Digestible`] is the only input path.** Byte slices, strings, single
//!    bytes and [`CanonicalBytes`] are digestible. Wider integers are not:
//!    their in-memory representation is platform dependent.
//!
//! 4. **[`Digest`] is immutable.** It is created once from finished algorithm
//!    output and then only read, in raw, hex or base64 form.
//!
//! ## Quick Start
//!
//! ```ignore
//! use digestkit_core::{digest, DigestBuffer};
//! use digestkit_crypto::Sha256;
//!
//! let one_shot = digest("abc", Sha256::new());
//!
//! let mut buffer = DigestBuffer::new(Sha256::new());
//! buffer += "a";
//! buffer += "b";
//! buffer += "c";
//! assert_eq!(buffer.digest(), one_shot);
//! ```

pub mod algorithm;
pub mod buffer;
pub mod canonical;
pub mod convenience;
pub mod digest;
pub mod digestible;
pub mod error;
pub mod version;

// Re-export primary types at crate root for ergonomic imports.
pub use algorithm::Algorithm;
pub use buffer::DigestBuffer;
pub use canonical::CanonicalBytes;
pub use convenience::{digest, digest_all, digest_reader, digest_value};
pub use digest::{Base64Options, Digest, LineEnding, LineLength};
pub use digestible::Digestible;
pub use error::{CanonicalizationError, DigestError};
pub use version::{VERSION_NUMBER, VERSION_STRING, VERSION_STRING_BYTES};
