//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::scanner::{ProbeTimeouts, ScanConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/lanscout)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the XDG directories. Nothing is created.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "lanscout", "lanscout")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Concurrent host probes.
    pub concurrency: usize,
    /// Per-port connect timeout in milliseconds.
    pub port_timeout_ms: u64,
    /// Reachability timeout in milliseconds.
    pub reachability_timeout_ms: u64,
    /// Per-host collection deadline in milliseconds.
    pub host_deadline_ms: u64,
    /// Default output format.
    pub output_format: String,
    /// Show a progress bar while scanning.
    pub show_progress: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            concurrency: 50,
            port_timeout_ms: 800,
            reachability_timeout_ms: 1500,
            host_deadline_ms: 2000,
            output_format: "plain".to_string(),
            show_progress: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if absent.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::discover()?.settings_file();
        if !file.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Reject values that would make a scan hang or never run.
    pub fn validate(&self) -> ConfigResult<()> {
        let non_zero: [(&'static str, u64); 4] = [
            ("concurrency", self.concurrency as u64),
            ("port_timeout_ms", self.port_timeout_ms),
            ("reachability_timeout_ms", self.reachability_timeout_ms),
            ("host_deadline_ms", self.host_deadline_ms),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Scan configuration described by these settings.
    pub fn scan_config(&self) -> ScanConfig {
        let config = ScanConfig::default()
            .with_concurrency(self.concurrency)
            .with_host_deadline(Duration::from_millis(self.host_deadline_ms))
            .with_timeouts(ProbeTimeouts {
                reachability: Duration::from_millis(self.reachability_timeout_ms),
                port: Duration::from_millis(self.port_timeout_ms),
            });

        if self.show_progress {
            config.with_progress()
        } else {
            config
        }
    }
}
