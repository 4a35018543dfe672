//! # CLI Configuration
//!
//! Settings shared by all subcommands, read from a YAML file:
//!
//! ```yaml
//! algorithm: sha512
//! encoding: base64
//! wrap: 76
//! allowed: [sha256, sha512, sha3-256]
//! ```
//!
//! Precedence, lowest first: built-in defaults, the config file (named by
//! `--config` or the `DIGESTKIT_CONFIG` environment variable), then
//! command-line flags. Unknown keys are rejected so typos do not silently
//! fall back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use digestkit_core::{Base64Options, LineEnding, LineLength};
use digestkit_crypto::{AlgorithmSet, DigestAlgorithm};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DIGESTKIT_CONFIG";

/// How digests are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
}

/// Effective CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Algorithm used when a command does not name one.
    pub algorithm: DigestAlgorithm,
    /// Default output encoding for `hash`.
    pub encoding: OutputEncoding,
    /// Base64 line width (64 or 76); unset means a single line.
    pub wrap: Option<usize>,
    /// Algorithms commands may use.
    pub allowed: AlgorithmSet,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Sha256,
            encoding: OutputEncoding::Hex,
            wrap: None,
            allowed: AlgorithmSet::all(),
        }
    }
}

impl CliConfig {
    /// Load the configuration from `explicit`, or from the file named by
    /// [`CONFIG_ENV`], or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("no config file; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), algorithm = %config.algorithm, "loaded config");
        Ok(config)
    }

    /// Parse and validate YAML config text. Blank text yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.allowed.is_empty() {
            bail!("`allowed` must name at least one algorithm");
        }
        self.allowed
            .select(self.algorithm)
            .context("default `algorithm` must be in `allowed`")?;
        if let Some(width) = self.wrap {
            line_length(width)?;
        }
        Ok(())
    }

    /// Base64 options for a `wrap` override, or the configured width.
    /// Wrapped lines are separated by `\n` on the terminal.
    pub fn base64_options(&self, wrap_override: Option<usize>) -> Result<Base64Options> {
        let mut options = Base64Options::new().line_ending(LineEnding::Lf);
        if let Some(width) = wrap_override.or(self.wrap) {
            options = options.wrap(line_length(width)?);
        }
        Ok(options)
    }

    /// The requested algorithm (or the default), checked against `allowed`.
    pub fn algorithm_for(&self, requested: Option<DigestAlgorithm>) -> Result<DigestAlgorithm> {
        let algorithm = requested.unwrap_or(self.algorithm);
        Ok(self.allowed.select(algorithm)?)
    }
}

fn line_length(width: usize) -> Result<LineLength> {
    match LineLength::from_chars(width) {
        Some(length) => Ok(length),
        None => bail!("base64 wrap width must be 64 or 76, got {width}"),
    }
}
