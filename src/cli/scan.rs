//! Scan subcommand implementation.
//!
//! Handles the `lanscout scan` command for sweeping the local subnet.

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::network::{self, InterfaceSource, SystemInterfaces};
use crate::output;
use crate::scanner::{resolution_failed, run_scan, ScanConfig, SystemNetwork};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Scan the local subnet for devices and open services.
#[derive(Parser, Debug, Default)]
pub struct ScanCommand {
    /// Maximum number of hosts probed at once
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Per-port connect timeout in milliseconds
    #[arg(long = "port-timeout", value_name = "MS")]
    pub port_timeout: Option<u64>,

    /// Reachability test timeout in milliseconds
    #[arg(long = "reach-timeout", value_name = "MS")]
    pub reach_timeout: Option<u64>,

    /// Time a host probe may run before its result is dropped, in milliseconds
    #[arg(long = "host-deadline", value_name = "MS")]
    pub host_deadline: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(&self, settings: &AppSettings, verbose: bool, quiet: bool) -> CliResult<()> {
        let format = self
            .output
            .unwrap_or_else(|| OutputFormat::from_setting(&settings.output_format));
        let config = self.scan_config(settings, verbose && !quiet);

        // one enumeration feeds the header, the sweep and MAC lookups
        let report = match SystemInterfaces.interfaces() {
            Ok(table) => {
                let backend = SystemNetwork::new(table.clone());
                let announce = !quiet && format == OutputFormat::Plain;

                if announce && !backend.uses_icmp() {
                    output::print_warning(
                        "ICMP echo unavailable; reachability uses TCP echo only.",
                    );
                }

                // Print scan header (unless JSON/CSV output for clean parsing)
                if announce {
                    let subnet = network::resolve(&table)
                        .map(|info| info.subnet)
                        .unwrap_or_else(|_| network::FALLBACK_SUBNET.to_string());
                    output::print_scan_header(&subnet, config.concurrency);
                }

                debug!("scan config: {:?}", config);
                run_scan(&table, Arc::new(backend), &config).await
            }
            Err(e) => resolution_failed(&e),
        };

        output::print_results(&report, format)?;
        Ok(())
    }

    /// Merge command-line overrides onto the loaded settings.
    pub fn scan_config(&self, settings: &AppSettings, progress: bool) -> ScanConfig {
        let mut config = settings.scan_config();

        if let Some(concurrency) = self.concurrency {
            config = config.with_concurrency(concurrency);
        }
        if let Some(ms) = self.host_deadline {
            config = config.with_host_deadline(Duration::from_millis(ms.max(1)));
        }

        let mut timeouts = config.timeouts;
        if let Some(ms) = self.port_timeout {
            timeouts.port = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = self.reach_timeout {
            timeouts.reachability = Duration::from_millis(ms.max(1));
        }
        config = config.with_timeouts(timeouts);

        if progress {
            config = config.with_progress();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let settings = AppSettings {
            concurrency: 20,
            port_timeout_ms: 500,
            ..AppSettings::default()
        };
        let cmd = ScanCommand {
            concurrency: Some(5),
            host_deadline: Some(3000),
            ..ScanCommand::default()
        };

        let config = cmd.scan_config(&settings, false);
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.host_deadline, Duration::from_secs(3));
        assert_eq!(config.timeouts.port, Duration::from_millis(500));
        assert!(!config.show_progress);
    }

    #[test]
    fn test_settings_used_without_flags() {
        let settings = AppSettings::default();
        let config = ScanCommand::default().scan_config(&settings, true);
        assert_eq!(config.concurrency, 50);
        assert_eq!(config.host_deadline, Duration::from_secs(2));
        assert_eq!(config.timeouts.reachability, Duration::from_millis(1500));
        assert!(config.show_progress);
    }

    #[test]
    fn test_zero_concurrency_flag_is_clamped() {
        let cmd = ScanCommand {
            concurrency: Some(0),
            ..ScanCommand::default()
        };
        assert_eq!(cmd.scan_config(&AppSettings::default(), false).concurrency, 1);
    }
}
