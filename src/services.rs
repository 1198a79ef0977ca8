//! Well-known service table.
//!
//! The host prober only ever probes the ports listed here, in this order.
//! Each entry carries the short service label, a human description and a
//! static risk tier that does not depend on what the service actually says.

use crate::types::Port;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static exposure risk of a well-known port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// One row of the service table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub port: Port,
    pub name: &'static str,
    pub description: &'static str,
    pub risk: RiskLevel,
}

const fn svc(
    port: u16,
    name: &'static str,
    description: &'static str,
    risk: RiskLevel,
) -> ServiceInfo {
    ServiceInfo {
        port: Port::from_static(port),
        name,
        description,
        risk,
    }
}

/// Ports probed on every reachable host, in probe order.
pub const PORT_TABLE: [ServiceInfo; 20] = [
    svc(21, "FTP", "File Transfer Protocol", RiskLevel::High),
    svc(22, "SSH", "Secure Shell", RiskLevel::Medium),
    svc(23, "Telnet", "Telnet (Unencrypted)", RiskLevel::High),
    svc(25, "SMTP", "Email Server", RiskLevel::Low),
    svc(53, "DNS", "Domain Name System", RiskLevel::Low),
    svc(80, "HTTP", "Web Server", RiskLevel::Low),
    svc(110, "POP3", "Email Retrieval", RiskLevel::Low),
    svc(135, "RPC", "Windows RPC", RiskLevel::High),
    svc(139, "NetBIOS", "Windows File Sharing", RiskLevel::High),
    svc(143, "IMAP", "Email Server", RiskLevel::Low),
    svc(443, "HTTPS", "Secure Web Server", RiskLevel::Low),
    svc(445, "SMB", "Windows File Sharing", RiskLevel::High),
    svc(993, "IMAPS", "Secure Email", RiskLevel::Low),
    svc(995, "POP3S", "Secure Email", RiskLevel::Low),
    svc(1723, "PPTP", "VPN Server", RiskLevel::Medium),
    svc(3389, "RDP", "Remote Desktop", RiskLevel::Medium),
    svc(5900, "VNC", "Remote Desktop", RiskLevel::Medium),
    svc(8080, "HTTP-Alt", "Web Server", RiskLevel::Low),
    svc(8443, "HTTPS-Alt", "Secure Web Server", RiskLevel::Low),
    svc(9100, "Printer", "Network Printer", RiskLevel::Low),
];

/// Look up the table entry for a port.
pub fn lookup(port: Port) -> Option<&'static ServiceInfo> {
    PORT_TABLE.iter().find(|s| s.port == port)
}

/// Short service label, "Unknown" for ports outside the table.
pub fn service_name(port: Port) -> &'static str {
    lookup(port).map_or("Unknown", |s| s.name)
}

/// Human description, "Unknown Service" for ports outside the table.
pub fn service_description(port: Port) -> &'static str {
    lookup(port).map_or("Unknown Service", |s| s.description)
}

/// Static risk tier, LOW for ports outside the table.
pub fn risk_level(port: Port) -> RiskLevel {
    lookup(port).map_or(RiskLevel::Low, |s| s.risk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(n: u16) -> Port {
        Port::new(n).unwrap()
    }

    #[test]
    fn test_table_is_ascending_and_unique() {
        let ports: Vec<u16> = PORT_TABLE.iter().map(|s| s.port.as_u16()).collect();
        let mut sorted = ports.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ports, sorted);
        assert_eq!(
            ports,
            [21, 22, 23, 25, 53, 80, 110, 135, 139, 143, 443, 445, 993, 995, 1723, 3389, 5900, 8080, 8443, 9100]
        );
    }

    #[test]
    fn test_common_ports() {
        assert_eq!(service_name(port(22)), "SSH");
        assert_eq!(service_name(port(9100)), "Printer");
        assert_eq!(service_description(port(23)), "Telnet (Unencrypted)");
    }

    #[test]
    fn test_risk_tiers() {
        for p in [21, 23, 135, 139, 445] {
            assert_eq!(risk_level(port(p)), RiskLevel::High, "port {p}");
        }
        for p in [22, 1723, 3389, 5900] {
            assert_eq!(risk_level(port(p)), RiskLevel::Medium, "port {p}");
        }
        assert_eq!(risk_level(port(443)), RiskLevel::Low);
    }

    #[test]
    fn test_unknown_port() {
        assert!(lookup(port(12345)).is_none());
        assert_eq!(service_name(port(12345)), "Unknown");
        assert_eq!(service_description(port(12345)), "Unknown Service");
        assert_eq!(risk_level(port(12345)), RiskLevel::Low);
    }

    #[test]
    fn test_risk_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
    }
}
