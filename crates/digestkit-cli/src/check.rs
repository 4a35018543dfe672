//! # Check Subcommand
//!
//! Verifies files against a checksum list. Two line layouts are accepted,
//! and may be mixed within one list:
//!
//! ```text
//! <hex>  <path>              coreutils, text mode
//! <hex> *<path>              coreutils, binary mode
//! SHA256 (<path>) = <hex>    BSD tagged
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The algorithm for
//! an entry comes from its tag, else from `--algorithm`, else it is inferred
//! from the digest length using the configured policy's preference order.
//! Relative paths are looked up next to the list first, then in the
//! current directory.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use digestkit_core::{Digest, DigestError};
use digestkit_crypto::{verify_file, DigestAlgorithm};

use crate::config::CliConfig;
use crate::resolve_path;

/// Arguments for `digestkit check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Checksum list to verify (`-` for standard input).
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Algorithm for untagged lines. Inferred from digest length if omitted.
    #[arg(short, long)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Don't print OK for each successfully verified file.
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit non-zero for improperly formatted checksum lines.
    #[arg(long)]
    pub strict: bool,
}

/// One parsed checksum line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    /// Algorithm named by a BSD tag, if the line had one.
    pub algorithm: Option<DigestAlgorithm>,
    /// The expected digest.
    pub expected: Digest,
    /// The file to verify, as written in the list.
    pub path: PathBuf,
}

/// Parse one checksum line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<ChecklistEntry>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if let Some(entry) = parse_tagged(line)? {
        return Ok(Some(entry));
    }

    let Some((hex, rest)) = line.split_once(' ') else {
        bail!("expected `<digest>  <path>`");
    };
    let path = rest
        .strip_prefix(' ')
        .or_else(|| rest.strip_prefix('*'))
        .context("expected two spaces or ` *` between digest and path")?;
    if path.is_empty() {
        bail!("missing path");
    }
    let expected = Digest::from_hex(hex).context("invalid digest")?;
    Ok(Some(ChecklistEntry {
        algorithm: None,
        expected,
        path: PathBuf::from(path),
    }))
}

/// `TAG (path) = hex`. Returns `Ok(None)` if the line is not in this layout.
fn parse_tagged(line: &str) -> Result<Option<ChecklistEntry>> {
    let Some((tag, rest)) = line.split_once(" (") else {
        return Ok(None);
    };
    let Some((path, hex)) = rest.rsplit_once(") = ") else {
        return Ok(None);
    };
    // A coreutils path may itself contain " (", so only treat the line as
    // tagged when the prefix is a single word.
    if tag.is_empty() || tag.contains(char::is_whitespace) {
        return Ok(None);
    }
    let algorithm: DigestAlgorithm = tag.parse()?;
    let expected = Digest::from_hex(hex).context("invalid digest")?;
    if expected.len() != algorithm.output_len() {
        return Err(DigestError::LengthMismatch {
            expected: algorithm.output_len(),
            actual: expected.len(),
        }
        .into());
    }
    Ok(Some(ChecklistEntry {
        algorithm: Some(algorithm),
        expected,
        path: PathBuf::from(path),
    }))
}

/// Totals from one checklist run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Entries whose file matched.
    pub ok: usize,
    /// Entries that mismatched or could not be read.
    pub failed: usize,
    /// Lines that could not be parsed.
    pub malformed: usize,
}

impl CheckSummary {
    /// Exit code for the run.
    pub fn exit_code(&self, strict: bool) -> u8 {
        let verified_nothing = self.ok + self.failed == 0;
        if self.failed > 0 || verified_nothing || (strict && self.malformed > 0) {
            1
        } else {
            0
        }
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let (contents, base) = if args.list == Path::new("-") {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read checksum list from standard input")?;
        (contents, PathBuf::from("."))
    } else {
        let contents = std::fs::read_to_string(&args.list)
            .with_context(|| format!("failed to read checksum list: {}", args.list.display()))?;
        let base = args
            .list
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (contents, base)
    };

    let stdout = io::stdout();
    let summary = check_list(&contents, &base, args, config, &mut stdout.lock())?;
    Ok(summary.exit_code(args.strict))
}

/// Verify every entry in `contents`, writing `path: OK` / `path: FAILED`
/// lines to `out`.
pub fn check_list(
    contents: &str,
    base: &Path,
    args: &CheckArgs,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<CheckSummary> {
    if let Some(algorithm) = args.algorithm {
        config.allowed.select(algorithm)?;
    }

    let mut summary = CheckSummary::default();
    for (index, line) in contents.lines().enumerate() {
        let entry = match parse_line(line) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = index + 1, "improperly formatted checksum line: {e:#}");
                summary.malformed += 1;
                continue;
            }
        };

        let name = entry.path.display().to_string();
        match verify_entry(&entry, base, args.algorithm, config) {
            Ok(true) => {
                summary.ok += 1;
                if !args.quiet {
                    writeln!(out, "{name}: OK")?;
                }
            }
            Ok(false) => {
                summary.failed += 1;
                writeln!(out, "{name}: FAILED")?;
            }
            Err(e) => {
                tracing::error!("{name}: {e:#}");
                summary.failed += 1;
                writeln!(out, "{name}: FAILED")?;
            }
        }
    }

    if summary.malformed > 0 {
        tracing::warn!(count = summary.malformed, "improperly formatted lines skipped");
    }
    if summary.failed > 0 {
        tracing::warn!(
            failed = summary.failed,
            total = summary.ok + summary.failed,
            "computed checksums did NOT match"
        );
    }
    if summary.ok + summary.failed == 0 {
        tracing::error!("no properly formatted checksum lines found");
    }
    Ok(summary)
}

fn verify_entry(
    entry: &ChecklistEntry,
    base: &Path,
    fallback: Option<DigestAlgorithm>,
    config: &CliConfig,
) -> Result<bool> {
    let algorithm = match entry.algorithm.or(fallback) {
        Some(algorithm) => config.allowed.select(algorithm)?,
        None => config
            .allowed
            .for_output_len(entry.expected.len())
            .with_context(|| {
                format!(
                    "no allowed algorithm produces {}-byte digests",
                    entry.expected.len()
                )
            })?,
    };
    let path = resolve_path(&entry.path, base);
    tracing::debug!(path = %path.display(), %algorithm, "verifying");
    Ok(verify_file(&path, algorithm, &entry.expected)?)
}
