/// Wrap a RustCrypto hasher as a digestkit [`Algorithm`](digestkit_core::Algorithm).
///
/// The wrapper is `Clone` (an independent copy of the state), `Default`, and
/// has a `Debug` that does not print internal state.
macro_rules! rustcrypto_algorithm {
    (
        $(#[$meta:meta])*
        $name:ident => $inner:ty, $label:literal, $len:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name {
            state: $inner,
        }

        impl $name {
            /// Digest size in bytes.
            pub const OUTPUT_LEN: usize = $len;

            /// Start a new computation.
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        impl digestkit_core::Algorithm for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn output_len(&self) -> usize {
                $len
            }

            fn update(&mut self, data: &[u8]) {
                <$inner as ::sha2::Digest>::update(&mut self.state, data);
            }

            fn finish(self) -> Vec<u8> {
                <$inner as ::sha2::Digest>::finalize(self.state).to_vec()
            }
        }
    };
}
