//! # Algorithms and Version Subcommands

use std::io::{self, Write};

use anyhow::Result;
use digestkit_core::{VERSION_NUMBER, VERSION_STRING};
use digestkit_crypto::capability::PREFERENCE;

use crate::config::CliConfig;

/// Execute `digestkit algorithms` against stdout.
pub fn run_algorithms(config: &CliConfig) -> Result<u8> {
    let stdout = io::stdout();
    write_algorithms(config, &mut stdout.lock())?;
    Ok(0)
}

/// Print one row per algorithm, in preference order, with its output size
/// and whether the active policy allows it.
pub fn write_algorithms(config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{:<12} {:>4}  STATUS", "NAME", "BITS")?;
    for algorithm in PREFERENCE {
        let mut status = Vec::new();
        if algorithm == config.algorithm {
            status.push("default");
        }
        if algorithm.is_legacy() {
            status.push("legacy");
        }
        status.push(if config.allowed.contains(algorithm) {
            "allowed"
        } else {
            "disabled"
        });
        writeln!(
            out,
            "{:<12} {:>4}  {}",
            algorithm.as_str(),
            algorithm.output_len() * 8,
            status.join(", ")
        )?;
    }
    Ok(())
}

/// Execute `digestkit version` against stdout.
pub fn run_version() -> Result<u8> {
    let stdout = io::stdout();
    write_version(&mut stdout.lock())?;
    Ok(0)
}

/// Print the library version string and number.
pub fn write_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "digestkit {VERSION_STRING} (version number {VERSION_NUMBER})")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestkit_crypto::{AlgorithmSet, DigestAlgorithm};

    fn render(config: &CliConfig) -> String {
        let mut out = Vec::new();
        write_algorithms(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lists_every_algorithm_in_preference_order() {
        let out = render(&CliConfig::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + PREFERENCE.len());
        assert!(lines[0].starts_with("NAME"));
        assert_eq!(lines[1], "sha256        256  default, allowed");
        assert_eq!(lines.last().copied(), Some("sha1          160  legacy, allowed"));
    }

    #[test]
    fn test_marks_disabled_algorithms() {
        let config = CliConfig {
            algorithm: DigestAlgorithm::Sha3_256,
            allowed: AlgorithmSet::modern(),
            ..CliConfig::default()
        };
        let out = render(&config);
        assert!(out.contains("sha1          160  legacy, disabled"));
        assert!(out.contains("sha3-256      256  default, allowed"));
        assert!(out.contains("sha256        256  allowed"));
    }

    #[test]
    fn test_version_line() {
        let mut out = Vec::new();
        write_version(&mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with(&format!("digestkit {VERSION_STRING} ")));
        assert!(line.contains(&VERSION_NUMBER.to_string()));
    }
}
