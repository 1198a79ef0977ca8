//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::services::RiskLevel;
use crate::types::{Device, NetworkInfo, ScanReport};
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Print a report in human-readable plain text format.
pub fn print_plain(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, report)
}

/// Write a report as plain text.
pub fn write_plain<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    // Header
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                  {} Network Scan Results",
        style("lanscout").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    if let Some(info) = &report.network_info {
        write_network_info(out, info)?;
        writeln!(out)?;
    }

    if !report.is_success() {
        writeln!(out, "  {} {}", style("Error:").red().bold(), report.message)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "  {} {} devices found at {}",
        style("Summary:").bold(),
        style(report.devices().len()).green().bold(),
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "  {}", style(&report.message).dim())?;
    writeln!(out)?;

    if report.devices().is_empty() {
        writeln!(out, "  {}", style("No devices responded.").dim())?;
    }

    for device in report.devices() {
        write_device(out, device)?;
    }

    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    Ok(())
}

/// Write the local network block.
pub fn write_network_info<W: Write>(out: &mut W, info: &NetworkInfo) -> io::Result<()> {
    let unknown = || "Unknown".to_string();

    writeln!(
        out,
        "  {} {}",
        style("Interface:").bold(),
        info.interface.clone().unwrap_or_else(unknown)
    )?;
    writeln!(
        out,
        "  {} {}",
        style("Local IP:").bold(),
        info.local_ip.map(|ip| ip.to_string()).unwrap_or_else(unknown)
    )?;
    writeln!(out, "  {} {}.x", style("Subnet:").bold(), info.subnet)?;
    writeln!(
        out,
        "  {} {}",
        style("Subnet Mask:").bold(),
        info.subnet_mask.clone().unwrap_or_else(unknown)
    )?;

    if info.fallback {
        writeln!(
            out,
            "  {} no active interface detected, using a default subnet",
            style("Caveat:").yellow().bold()
        )?;
    }
    Ok(())
}

fn write_device<W: Write>(out: &mut W, device: &Device) -> io::Result<()> {
    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(
        out,
        "  {}  {}",
        style(device.ip).white().bold(),
        style(
            device
                .device_type
                .map(|t| t.label())
                .unwrap_or("Unknown")
        )
        .cyan()
    )?;
    writeln!(
        out,
        "    {} {}   {} {}",
        style("Hostname:").bold(),
        device.hostname_or_unknown(),
        style("MAC:").bold(),
        device.mac_or_unknown()
    )?;

    if device.open_ports.is_empty() {
        writeln!(out, "    {}", style("No open ports in the probed set.").dim())?;
    } else {
        writeln!(
            out,
            "    {:>6}  {:<10}  {:<24}  {}",
            style("PORT").bold(),
            style("SERVICE").bold(),
            style("DESCRIPTION").bold(),
            style("RISK").bold()
        )?;
        for port in &device.open_ports {
            writeln!(
                out,
                "    {:>6}  {:<10}  {:<24}  {}",
                port.port.as_u16(),
                port.service,
                port.description,
                risk_style(port.risk_level).apply_to(port.risk_level.to_string())
            )?;
        }
    }

    for note in &device.security_notes {
        writeln!(out, "    {}", note)?;
    }
    writeln!(out)?;
    Ok(())
}

fn risk_style(risk: RiskLevel) -> Style {
    match risk {
        RiskLevel::High => Style::new().red().bold(),
        RiskLevel::Medium => Style::new().yellow(),
        RiskLevel::Low => Style::new().green(),
    }
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(subnet: &str, concurrency: usize) {
    eprintln!();
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("lanscout").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!(
        "{} Sweeping {}.1-254 with {} workers...",
        style("•").dim(),
        style(subnet).white().bold(),
        style(concurrency).white().bold()
    );
    eprintln!();
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DeviceType;
    use crate::services;
    use crate::types::{Port, PortResult};
    use std::net::Ipv4Addr;

    fn render(report: &ScanReport) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, report).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn test_plain_report() {
        let telnet = PortResult::from(services::lookup(Port::new(23).unwrap()).unwrap());
        let device = Device::reachable(
            Ipv4Addr::new(192, 168, 1, 30),
            "old-box".to_string(),
            "Unknown".to_string(),
            vec![telnet],
            DeviceType::NetworkDevice,
            crate::analysis::assess(&[]),
        );
        let info = NetworkInfo::detected(Ipv4Addr::new(192, 168, 1, 10), "eth0", "192.168.1", "255.255.255.0");
        let text = render(&ScanReport::success(info, vec![device]));

        assert!(text.contains("Subnet: 192.168.1.x"));
        assert!(text.contains("192.168.1.30"));
        assert!(text.contains("Telnet"));
        assert!(text.contains("HIGH"));
        assert!(text.contains("old-box"));
    }

    #[test]
    fn test_plain_error_and_fallback() {
        let text = render(&ScanReport::error(
            Some(NetworkInfo::fallback("192.168.1")),
            "Could not determine local network subnet",
        ));
        assert!(text.contains("Caveat:"));
        assert!(text.contains("Error: Could not determine local network subnet"));
    }
}
