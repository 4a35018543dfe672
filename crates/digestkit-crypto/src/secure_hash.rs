//! # FIPS 180-4 — SHA-1 and the SHA-2 Family
//!
//! Thin wrappers over the RustCrypto `sha1` and `sha2` hashers.
//!
//! SHA-1 has practical chosen-prefix collisions. It is here for verifying
//! existing checksums and interoperating with older systems; do not use it
//! in new designs.

rustcrypto_algorithm! {
    /// SHA-1 (160-bit). Legacy: collision resistance is broken.
    Sha1 => sha1::Sha1, "sha1", 20
}

rustcrypto_algorithm! {
    /// SHA-224 (SHA-256 with a different IV, truncated to 224 bits).
    Sha224 => sha2::Sha224, "sha224", 28
}

rustcrypto_algorithm! {
    /// SHA-256.
    Sha256 => sha2::Sha256, "sha256", 32
}

rustcrypto_algorithm! {
    /// SHA-384 (SHA-512 with a different IV, truncated to 384 bits).
    Sha384 => sha2::Sha384, "sha384", 48
}

rustcrypto_algorithm! {
    /// SHA-512.
    Sha512 => sha2::Sha512, "sha512", 64
}

rustcrypto_algorithm! {
    /// SHA-512/256: SHA-512 with its own IV, truncated to 256 bits.
    #[allow(non_camel_case_types)]
    Sha512_256 => sha2::Sha512_256, "sha512-256", 32
}
