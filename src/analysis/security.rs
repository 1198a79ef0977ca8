//! Security notes for a device's open ports.
//!
//! Notes are additive: per-port notes for every HIGH or MEDIUM port, then
//! protocol warnings for Telnet, FTP and RDP. Nothing is deduplicated.

use crate::services::RiskLevel;
use crate::types::PortResult;

pub const TELNET_WARNING: &str = "🚨 CRITICAL: Telnet is unencrypted - switch to SSH";
pub const FTP_WARNING: &str = "⚠️ WARNING: FTP may transmit passwords in plain text";
pub const RDP_NOTICE: &str = "🔐 INFO: RDP detected - ensure strong passwords and limit access";
pub const NO_CONCERNS: &str = "✅ No major security concerns detected";

/// Protocol warnings keyed by port, appended in this order.
const PROTOCOL_WARNINGS: &[(u16, &str)] = &[(23, TELNET_WARNING), (21, FTP_WARNING), (3389, RDP_NOTICE)];

fn port_note(port: &PortResult) -> Option<String> {
    match port.risk_level {
        RiskLevel::High => Some(format!(
            "⚠️ HIGH RISK: {} (port {}) - Consider securing or disabling",
            port.service, port.port
        )),
        RiskLevel::Medium => Some(format!(
            "🔶 MEDIUM RISK: {} (port {}) - Ensure strong authentication",
            port.service, port.port
        )),
        RiskLevel::Low => None,
    }
}

/// Assess a device's open ports. Pure and total; never returns an empty list.
pub fn assess(open_ports: &[PortResult]) -> Vec<String> {
    let mut notes: Vec<String> = open_ports.iter().filter_map(port_note).collect();

    for (port, warning) in PROTOCOL_WARNINGS {
        if open_ports.iter().any(|p| p.port.as_u16() == *port) {
            notes.push((*warning).to_string());
        }
    }

    if notes.is_empty() {
        notes.push(NO_CONCERNS.to_string());
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services;
    use crate::types::Port;

    fn ports(list: &[u16]) -> Vec<PortResult> {
        list.iter()
            .map(|&p| PortResult::from(services::lookup(Port::new(p).unwrap()).unwrap()))
            .collect()
    }

    #[test]
    fn test_no_ports() {
        assert_eq!(assess(&[]), vec![NO_CONCERNS.to_string()]);
    }

    #[test]
    fn test_low_risk_only() {
        assert_eq!(assess(&ports(&[80, 443])), vec![NO_CONCERNS.to_string()]);
    }

    #[test]
    fn test_telnet_gets_two_notes() {
        let notes = assess(&ports(&[23]));
        assert_eq!(notes.len(), 2);
        assert!(notes[0].starts_with("⚠️ HIGH RISK: Telnet (port 23)"));
        assert_eq!(notes[1], TELNET_WARNING);
    }

    #[test]
    fn test_notes_are_additive() {
        let notes = assess(&ports(&[21, 23]));
        assert_eq!(notes.len(), 4);
        assert!(notes[0].contains("FTP (port 21)"));
        assert!(notes[1].contains("Telnet (port 23)"));
        assert_eq!(notes[2], TELNET_WARNING);
        assert_eq!(notes[3], FTP_WARNING);
    }

    #[test]
    fn test_medium_and_rdp() {
        let notes = assess(&ports(&[22, 3389]));
        assert_eq!(
            notes,
            vec![
                "🔶 MEDIUM RISK: SSH (port 22) - Ensure strong authentication".to_string(),
                "🔶 MEDIUM RISK: RDP (port 3389) - Ensure strong authentication".to_string(),
                RDP_NOTICE.to_string(),
            ]
        );
    }
}
