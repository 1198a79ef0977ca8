//! Info subcommand implementation.

use crate::error::CliResult;
use crate::network::{self, InterfaceSource, SystemInterfaces};
use crate::output;
use clap::Parser;
use std::io;

/// Show the interface and subnet a scan would use.
#[derive(Parser, Debug, Default)]
pub struct InfoCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoCommand {
    /// Execute the info command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        self.render(&SystemInterfaces, quiet)
    }

    fn render(&self, source: &dyn InterfaceSource, quiet: bool) -> CliResult<()> {
        let info = network::resolve(source)?;

        if self.json {
            let json = serde_json::to_string_pretty(&info).map_err(io::Error::other)?;
            println!("{}", json);
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        output::write_network_info(&mut out, &info)?;

        if !quiet {
            let hosts = network::candidate_hosts(&info.subnet)?;
            output::print_info(&format!(
                "{} candidate hosts: {} - {}",
                hosts.len(),
                hosts.first().map(|ip| ip.to_string()).unwrap_or_default(),
                hosts.last().map(|ip| ip.to_string()).unwrap_or_default()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ScanError, ScanResult};
    use crate::network::InterfaceSnapshot;

    struct Broken;

    impl InterfaceSource for Broken {
        fn interfaces(&self) -> ScanResult<Vec<InterfaceSnapshot>> {
            Err(ScanError::InterfaceEnumeration("permission denied".to_string()))
        }
    }

    #[test]
    fn test_enumeration_failure_is_reported() {
        let err = InfoCommand::default().render(&Broken, true).unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }
}
