//! # Hash Subcommand
//!
//! Digests files, standard input, or a literal string and prints one line
//! per input:
//!
//! ```text
//! ba7816bf...f20015ad  notes.txt            (default)
//! SHA256 (notes.txt) = ba7816bf...f20015ad  (--tag)
//! ```
//!
//! Unreadable files are reported and skipped; the command then exits 1
//! after processing the remaining inputs.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use digestkit_core::{digest_reader, Base64Options, Digest};
use digestkit_crypto::{digest_file, DigestAlgorithm};

use crate::config::{CliConfig, OutputEncoding};

/// Arguments for `digestkit hash`.
#[derive(Args, Debug, Default)]
pub struct HashArgs {
    /// Files to digest. Standard input is read when none are given, or for `-`.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Digest algorithm (e.g. sha256, sha3-512). Defaults to the configured one.
    #[arg(short, long)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Digest this text instead of reading files.
    #[arg(long, value_name = "TEXT", conflicts_with = "files")]
    pub string: Option<String>,

    /// Print base64 instead of hex.
    #[arg(long)]
    pub base64: bool,

    /// Wrap base64 output at 64 or 76 characters.
    #[arg(long, value_name = "CHARS")]
    pub wrap: Option<usize>,

    /// Print BSD-style tagged lines: `ALGO (path) = digest`.
    #[arg(long)]
    pub tag: bool,
}

/// How each digest line is rendered.
#[derive(Debug, Clone, Copy)]
struct Render {
    algorithm: DigestAlgorithm,
    encoding: OutputEncoding,
    base64: Base64Options,
    tag: bool,
}

impl Render {
    fn encode(&self, digest: &Digest) -> String {
        match self.encoding {
            OutputEncoding::Hex => digest.to_hex(),
            OutputEncoding::Base64 => digest.to_base64(self.base64),
        }
    }

    fn line(&self, digest: &Digest, name: &str) -> String {
        let encoded = self.encode(digest);
        if self.tag {
            format!("{} ({name}) = {encoded}", self.algorithm.tag())
        } else {
            format!("{encoded}  {name}")
        }
    }
}

/// Execute the hash subcommand against the process's stdin and stdout.
pub fn run_hash(args: &HashArgs, config: &CliConfig) -> Result<u8> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_hash_with(args, config, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute the hash subcommand with explicit input and output streams.
pub fn run_hash_with(
    args: &HashArgs,
    config: &CliConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<u8> {
    let algorithm = config.algorithm_for(args.algorithm)?;
    let encoding = if args.base64 {
        OutputEncoding::Base64
    } else {
        config.encoding
    };
    let render = Render {
        algorithm,
        encoding,
        base64: config.base64_options(args.wrap)?,
        tag: args.tag,
    };
    tracing::info!(%algorithm, ?encoding, "hashing");

    if let Some(text) = &args.string {
        let digest = algorithm.digest(text.as_str());
        let line = if render.tag {
            render.line(&digest, &format!("\"{text}\""))
        } else {
            render.encode(&digest)
        };
        writeln!(out, "{line}")?;
        return Ok(0);
    }

    if args.files.is_empty() {
        let digest = digest_stdin(stdin, algorithm)?;
        writeln!(out, "{}", render.line(&digest, "-"))?;
        return Ok(0);
    }

    let mut failures = 0usize;
    for path in &args.files {
        let digest = if path == Path::new("-") {
            digest_stdin(stdin, algorithm)
        } else {
            digest_file(path, algorithm)
                .with_context(|| format!("{}: cannot digest file", path.display()))
        };
        match digest {
            Ok(digest) => {
                writeln!(out, "{}", render.line(&digest, &path.display().to_string()))?;
            }
            Err(e) => {
                tracing::error!("{e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::warn!(failures, total = args.files.len(), "some inputs could not be digested");
        return Ok(1);
    }
    Ok(0)
}

fn digest_stdin(stdin: &mut dyn Read, algorithm: DigestAlgorithm) -> Result<Digest> {
    digest_reader(stdin, algorithm.hasher()).context("failed to read standard input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestkit_crypto::AlgorithmSet;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn run(args: &HashArgs, config: &CliConfig, input: &[u8]) -> (u8, String) {
        let mut stdin = input;
        let mut out = Vec::new();
        let code = run_hash_with(args, config, &mut stdin, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_hash_string_hex() {
        let args = HashArgs {
            string: Some("abc".to_string()),
            ..HashArgs::default()
        };
        let (code, out) = run(&args, &CliConfig::default(), b"");
        assert_eq!(code, 0);
        assert_eq!(out, format!("{ABC_SHA256}\n"));
    }

    #[test]
    fn test_hash_string_tagged() {
        let args = HashArgs {
            string: Some("abc".to_string()),
            tag: true,
            ..HashArgs::default()
        };
        let (_, out) = run(&args, &CliConfig::default(), b"");
        assert_eq!(out, format!("SHA256 (\"abc\") = {ABC_SHA256}\n"));
    }

    #[test]
    fn test_hash_stdin_when_no_files() {
        let (code, out) = run(&HashArgs::default(), &CliConfig::default(), b"abc");
        assert_eq!(code, 0);
        assert_eq!(out, format!("{ABC_SHA256}  -\n"));
    }

    #[test]
    fn test_hash_files_coreutils_layout() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("empty.txt");
        std::fs::write(&a, b"abc").unwrap();
        std::fs::write(&b, b"").unwrap();

        let args = HashArgs {
            files: vec![a.clone(), b.clone()],
            ..HashArgs::default()
        };
        let (code, out) = run(&args, &CliConfig::default(), b"");
        assert_eq!(code, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("{ABC_SHA256}  {}", a.display()));
        assert_eq!(lines[1], format!("{EMPTY_SHA256}  {}", b.display()));
    }

    #[test]
    fn test_dash_reads_stdin_among_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, b"").unwrap();

        let args = HashArgs {
            files: vec![PathBuf::from("-"), a],
            ..HashArgs::default()
        };
        let (code, out) = run(&args, &CliConfig::default(), b"abc");
        assert_eq!(code, 0);
        assert!(out.starts_with(&format!("{ABC_SHA256}  -\n")));
    }

    #[test]
    fn test_missing_file_exits_one_but_continues() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, b"abc").unwrap();

        let args = HashArgs {
            files: vec![dir.path().join("missing.txt"), good],
            ..HashArgs::default()
        };
        let (code, out) = run(&args, &CliConfig::default(), b"");
        assert_eq!(code, 1);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with(ABC_SHA256));
    }

    #[test]
    fn test_base64_flag_and_wrapping() {
        let args = HashArgs {
            string: Some("abc".to_string()),
            algorithm: Some(DigestAlgorithm::Sha512),
            base64: true,
            wrap: Some(64),
            ..HashArgs::default()
        };
        let (_, out) = run(&args, &CliConfig::default(), b"");
        let digest = DigestAlgorithm::Sha512.digest("abc");
        let single = digest.to_base64(Base64Options::new());
        assert_eq!(single.len(), 88);
        assert_eq!(out, format!("{}\n{}\n", &single[..64], &single[64..]));
    }

    #[test]
    fn test_config_encoding_applies_without_flag() {
        let config = CliConfig {
            encoding: OutputEncoding::Base64,
            ..CliConfig::default()
        };
        let args = HashArgs {
            string: Some("abc".to_string()),
            ..HashArgs::default()
        };
        let (_, out) = run(&args, &config, b"");
        assert_eq!(out, "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=\n");
    }

    #[test]
    fn test_disallowed_algorithm_is_an_error() {
        let config = CliConfig {
            allowed: AlgorithmSet::modern(),
            ..CliConfig::default()
        };
        let args = HashArgs {
            string: Some("abc".to_string()),
            algorithm: Some(DigestAlgorithm::Sha1),
            ..HashArgs::default()
        };
        let mut out = Vec::new();
        assert!(run_hash_with(&args, &config, &mut &b""[..], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_wrap_is_an_error() {
        let args = HashArgs {
            string: Some("abc".to_string()),
            base64: true,
            wrap: Some(70),
            ..HashArgs::default()
        };
        let mut out = Vec::new();
        assert!(run_hash_with(&args, &CliConfig::default(), &mut &b""[..], &mut out).is_err());
    }
}
