//! # FIPS 202 — The SHA-3 Family
//!
//! Fixed-output SHA-3 hashers over the Keccak permutation, wrapping
//! the RustCrypto `sha3` crate. Extendable-output functions (SHAKE) are not
//! offered: every [`Algorithm`](digestkit_core::Algorithm) has a fixed
//! output length.

rustcrypto_algorithm! {
    /// SHA3-224.
    #[allow(non_camel_case_types)]
    Sha3_224 => sha3::Sha3_224, "sha3-224", 28
}

rustcrypto_algorithm! {
    /// SHA3-256.
    #[allow(non_camel_case_types)]
    Sha3_256 => sha3::Sha3_256, "sha3-256", 32
}

rustcrypto_algorithm! {
    /// SHA3-384.
    #[allow(non_camel_case_types)]
    Sha3_384 => sha3::Sha3_384, "sha3-384", 48
}

rustcrypto_algorithm! {
    /// SHA3-512.
    #[allow(non_camel_case_types)]
    Sha3_512 => sha3::Sha3_512, "sha3-512", 64
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestkit_core::{digest, Algorithm};

    #[test]
    fn test_sha3_256_abc() {
        assert_eq!(
            digest("abc", Sha3_256::new()).to_hex(),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_sha3_differs_from_sha2_of_same_length() {
        let sha3 = digest("abc", Sha3_256::new());
        let sha2 = digest("abc", crate::Sha256::new());
        assert_eq!(sha3.len(), sha2.len());
        assert_ne!(sha3, sha2);
    }

    #[test]
    fn test_names_are_hyphenated() {
        assert_eq!(Sha3_224::new().name(), "sha3-224");
        assert_eq!(Sha3_512::new().name(), "sha3-512");
        assert_eq!(Sha3_384::new().output_len(), 48);
    }
}
