//! Config subcommand implementation.
//!
//! Handles the `lanscout config` command for viewing and initializing
//! the settings file.

use crate::cli::{load_settings, settings_path};
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use console::style;
use std::path::Path;

/// Show or initialize settings.
#[derive(Parser, Debug, Default)]
pub struct ConfigCommand {
    /// Write default settings to the settings file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file when used with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, custom: Option<&Path>, quiet: bool) -> CliResult<()> {
        let path = settings_path(custom)?;

        if self.init {
            if path.exists() && !self.force {
                output::print_warning(&format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
                return Ok(());
            }
            AppSettings::default().save_to(&path)?;
            if !quiet {
                output::print_success(&format!("Wrote default settings to {}", path.display()));
            }
            return Ok(());
        }

        let settings = load_settings(Some(&path))?;
        let source = if path.exists() { "file" } else { "defaults" };

        println!();
        println!("{} {} ({})", style("Settings:").bold(), path.display(), source);
        println!("  {:<26} {}", "concurrency", settings.concurrency);
        println!("  {:<26} {}", "port_timeout_ms", settings.port_timeout_ms);
        println!("  {:<26} {}", "reachability_timeout_ms", settings.reachability_timeout_ms);
        println!("  {:<26} {}", "host_deadline_ms", settings.host_deadline_ms);
        println!("  {:<26} {}", "output_format", settings.output_format);
        println!("  {:<26} {}", "show_progress", settings.show_progress);
        println!();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let cmd = ConfigCommand {
            init: true,
            force: false,
        };
        cmd.execute(Some(&path), true).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"concurrency": 7}"#).unwrap();

        let cmd = ConfigCommand {
            init: true,
            force: false,
        };
        cmd.execute(Some(&path), true).unwrap();

        assert_eq!(AppSettings::load_from(&path).unwrap().concurrency, 7);
    }
}
