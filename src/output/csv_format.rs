//! CSV output formatting.

use crate::types::ScanReport;
use std::io::{self, Write};

/// Print devices in CSV format.
pub fn print_csv(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), report)
}

/// Write one row per device.
pub fn write_csv<W: Write>(writer: W, report: &ScanReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "ip",
        "hostname",
        "macAddress",
        "deviceType",
        "portCount",
        "openPorts",
        "securityNotes",
    ])?;

    for device in report.devices() {
        let ports = device
            .open_ports
            .iter()
            .map(|p| format!("{}/{}", p.port, p.service))
            .collect::<Vec<_>>()
            .join(";");

        wtr.write_record([
            &device.ip.to_string(),
            device.hostname_or_unknown(),
            device.mac_or_unknown(),
            device.device_type.map(|t| t.label()).unwrap_or("Unknown"),
            &device.port_count.to_string(),
            &ports,
            &device.security_notes.join(" | "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{self, DeviceType};
    use crate::services;
    use crate::types::{Device, NetworkInfo, Port, PortResult};
    use std::net::Ipv4Addr;

    #[test]
    fn test_csv_rows() {
        let open: Vec<PortResult> = [22, 80]
            .iter()
            .map(|&p| PortResult::from(services::lookup(Port::new(p).unwrap()).unwrap()))
            .collect();
        let device = Device::reachable(
            Ipv4Addr::new(10, 0, 0, 5),
            "Unknown".to_string(),
            "Unknown".to_string(),
            open.clone(),
            DeviceType::LinuxServer,
            analysis::assess(&open),
        );
        let report = ScanReport::success(NetworkInfo::fallback("10.0.0"), vec![device]);

        let mut buf = Vec::new();
        write_csv(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ip,hostname,macAddress"));
        assert!(lines[1].starts_with("10.0.0.5,Unknown,Unknown,Linux Server,2,22/SSH;80/HTTP,"));
    }
}
