//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `lanscout scan` - Sweep the local /24 and report devices
//! - `lanscout info` - Show the interface and subnet a scan would use
//! - `lanscout config` - Show or initialize settings
//!
//! Running without a subcommand performs a scan with default flags.

mod info;
mod scan;
mod settings;

pub use info::InfoCommand;
pub use scan::ScanCommand;
pub use settings::ConfigCommand;

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::warn;

/// lanscout - Local network discovery and service audit.
///
/// Sweeps every address of the local IPv4 /24, probes a fixed set of
/// well-known ports on each responsive host, guesses what kind of device
/// it is and flags risky services.
#[derive(Parser, Debug)]
#[command(name = "lanscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local subnet discovery and service audit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output and a progress bar
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the local subnet
    #[command(alias = "s")]
    Scan(ScanCommand),

    /// Show the detected network
    #[command(alias = "i")]
    Info(InfoCommand),

    /// Show or initialize settings
    Config(ConfigCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl OutputFormat {
    /// Parse a format name from the settings file, falling back to plain.
    pub fn from_setting(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or_else(|_| {
            warn!("unknown output format '{}' in settings, using plain", name);
            Self::Plain
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Resolve the settings file path, honoring `--config`.
pub fn settings_path(custom: Option<&Path>) -> CliResult<PathBuf> {
    match custom {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::discover()?.settings_file()),
    }
}

/// Load settings from `--config` or the default location. A missing file
/// yields defaults.
pub fn load_settings(custom: Option<&Path>) -> CliResult<AppSettings> {
    match custom {
        None => Ok(AppSettings::load()?),
        Some(path) if path.exists() => Ok(AppSettings::load_from(path)?),
        Some(_) => Ok(AppSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["lanscout"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_scan_flags() {
        let cli = Cli::try_parse_from([
            "lanscout", "scan", "-c", "10", "--port-timeout", "300", "-o", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Scan(cmd)) => {
                assert_eq!(cmd.concurrency, Some(10));
                assert_eq!(cmd.port_timeout, Some(300));
                assert_eq!(cmd.output, Some(OutputFormat::Json));
                assert_eq!(cmd.host_deadline, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["lanscout", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_output_format_from_setting() {
        assert_eq!(OutputFormat::from_setting("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_setting("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_setting("yaml"), OutputFormat::Plain);
    }

    #[test]
    fn test_missing_settings_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_custom_settings_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"concurrency": 12, "output_format": "csv"}"#).unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.concurrency, 12);
        assert_eq!(settings.output_format, "csv");
        assert_eq!(settings.host_deadline_ms, 2000);
    }
}
