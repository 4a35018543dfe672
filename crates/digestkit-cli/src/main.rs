//! # digestkit CLI entry point
//!
//! Parses command-line arguments, loads configuration, initializes logging,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use digestkit_cli::check::{run_check, CheckArgs};
use digestkit_cli::config::CliConfig;
use digestkit_cli::hash::{run_hash, HashArgs};
use digestkit_cli::info::{run_algorithms, run_version};

/// Compute and verify SHA-1, SHA-2 and SHA-3 message digests.
#[derive(Parser, Debug)]
#[command(name = "digestkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Path to configuration file (overrides DIGESTKIT_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Digest files, standard input, or a string.
    Hash(HashArgs),

    /// Verify files against a checksum list.
    Check(CheckArgs),

    /// List supported algorithms and the active policy.
    Algorithms,

    /// Print the library version.
    Version,
}

fn main() -> ExitCode {
    // Usage errors exit 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    // RUST_LOG wins over -v when set.
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    match cli.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    tracing::debug!("digestkit CLI v{} starting", env!("CARGO_PKG_VERSION"));

    // `version` must work even when the config file is broken.
    let result = match &cli.command {
        Commands::Version => run_version(),
        Commands::Hash(args) => load_config(&cli).and_then(|config| run_hash(args, &config)),
        Commands::Check(args) => load_config(&cli).and_then(|config| run_check(args, &config)),
        Commands::Algorithms => load_config(&cli).and_then(|config| run_algorithms(&config)),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    CliConfig::load(cli.config.as_deref())
}
