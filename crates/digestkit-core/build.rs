//! Build script for digestkit-core.
//!
//! Emits the `major.minor` project version as an `f64` literal into
//! `OUT_DIR/version_number.rs`. Cargo only exposes the version as strings,
//! and there is no const string-to-float conversion, so the literal is
//! produced here and pulled in with `include!` by `src/version.rs`.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let major = env::var("CARGO_PKG_VERSION_MAJOR").unwrap_or_else(|_| "0".to_string());
    let minor = env::var("CARGO_PKG_VERSION_MINOR").unwrap_or_else(|_| "0".to_string());
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));

    fs::write(
        out_dir.join("version_number.rs"),
        format!("{major}.{minor}_f64\n"),
    )
    .expect("failed to write version_number.rs");
}
