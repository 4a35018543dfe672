//! Library version constants.
//!
//! `VERSION_NUMBER` is the `major.minor` pair as a float, generated by the
//! build script. `VERSION_STRING_BYTES` is NUL-terminated for callers that
//! hand it across a C boundary.

/// `major.minor` of the library version.
pub const VERSION_NUMBER: f64 = include!(concat!(env!("OUT_DIR"), "/version_number.rs"));

/// Full library version, e.g. `"0.1.0"`.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// [`VERSION_STRING`] followed by a single NUL byte.
pub const VERSION_STRING_BYTES: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
