//! Error types for lanscout.
//!
//! Uses `thiserror` for ergonomic error definitions. Probe-level failures
//! (refused ports, missing PTR records, unreachable hosts) are not errors
//! here: they degrade into smaller results inside the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a whole scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to enumerate network interfaces: {0}")]
    InterfaceEnumeration(String),

    #[error("no usable IPv4 interface found")]
    NoInterfaceFound,

    #[error("invalid subnet prefix: {0}")]
    InvalidSubnet(String),

    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised while locating, reading or writing settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
