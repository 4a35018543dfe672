//! # digestkit-cli — CLI Tool for digestkit
//!
//! Provides the `digestkit` command-line interface.
//!
//! ## Subcommands
//!
//! - `digestkit hash` — digest files, standard input or a string.
//! - `digestkit check` — verify a checksum list.
//! - `digestkit algorithms` — list supported algorithms and the active policy.
//! - `digestkit version` — print the library version.
//!
//! ## Output Compatibility
//!
//! `hash` output and `check` input use the coreutils layout
//! (`<hex>  <path>`), or the BSD tagged layout with `--tag`:
//!
//! ```bash
//! digestkit hash -a sha256 release.tar.gz > SHA256SUMS
//! digestkit check SHA256SUMS
//! digestkit hash --tag -a sha3-256 release.tar.gz
//! ```

pub mod check;
pub mod config;
pub mod hash;
pub mod info;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to a base directory.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `base`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}
