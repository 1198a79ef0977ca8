//! Per-host scan results.

use crate::analysis::DeviceType;
use crate::services::{RiskLevel, ServiceInfo};
use crate::types::Port;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Placeholder for hostname and MAC fields that could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// An open port, decorated from the service table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortResult {
    pub port: Port,
    pub service: String,
    pub description: String,
    pub risk_level: RiskLevel,
}

impl PortResult {
    /// Create a port result with explicit fields.
    pub fn new(
        port: Port,
        service: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            port,
            service: service.into(),
            description: description.into(),
            risk_level,
        }
    }
}

impl From<&ServiceInfo> for PortResult {
    fn from(info: &ServiceInfo) -> Self {
        Self::new(info.port, info.name, info.description, info.risk)
    }
}

/// One scanned address.
///
/// Unreachable devices carry no hostname, MAC, ports, type or notes; they
/// never make it into a report but are what the host prober returns for
/// silent addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub ip: Ipv4Addr,
    pub reachable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub open_ports: Vec<PortResult>,
    #[serde(default)]
    pub port_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_notes: Vec<String>,
}

impl Device {
    /// A device that did not answer the reachability test.
    pub fn unreachable(ip: Ipv4Addr) -> Self {
        Self {
            ip,
            reachable: false,
            hostname: None,
            mac_address: None,
            open_ports: Vec::new(),
            port_count: 0,
            device_type: None,
            security_notes: Vec::new(),
        }
    }

    /// A fully probed, reachable device.
    pub fn reachable(
        ip: Ipv4Addr,
        hostname: String,
        mac_address: String,
        open_ports: Vec<PortResult>,
        device_type: DeviceType,
        security_notes: Vec<String>,
    ) -> Self {
        Self {
            ip,
            reachable: true,
            hostname: Some(hostname),
            mac_address: Some(mac_address),
            port_count: open_ports.len(),
            open_ports,
            device_type: Some(device_type),
            security_notes,
        }
    }

    /// Hostname or "Unknown".
    pub fn hostname_or_unknown(&self) -> &str {
        self.hostname.as_deref().unwrap_or(UNKNOWN)
    }

    /// MAC address or "Unknown".
    pub fn mac_or_unknown(&self) -> &str {
        self.mac_address.as_deref().unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services;

    #[test]
    fn test_unreachable_device_is_empty() {
        let device = Device::unreachable(Ipv4Addr::new(10, 0, 0, 9));
        assert!(!device.reachable);
        assert!(device.hostname.is_none());
        assert!(device.mac_address.is_none());
        assert!(device.open_ports.is_empty());
        assert!(device.security_notes.is_empty());
        assert_eq!(device.hostname_or_unknown(), UNKNOWN);
    }

    #[test]
    fn test_device_json_keys() {
        let ssh = PortResult::from(services::lookup(Port::new(22).unwrap()).unwrap());
        let device = Device::reachable(
            Ipv4Addr::new(10, 0, 0, 5),
            "box.lan".to_string(),
            UNKNOWN.to_string(),
            vec![ssh],
            DeviceType::NetworkDevice,
            vec!["note".to_string()],
        );

        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["ip"], "10.0.0.5");
        assert_eq!(value["macAddress"], "Unknown");
        assert_eq!(value["portCount"], 1);
        assert_eq!(value["deviceType"], "Network Device");
        assert_eq!(value["openPorts"][0]["port"], 22);
        assert_eq!(value["openPorts"][0]["service"], "SSH");
        assert_eq!(value["openPorts"][0]["riskLevel"], "MEDIUM");
    }

    #[test]
    fn test_quiet_host_keeps_empty_port_list() {
        let device = Device::reachable(
            Ipv4Addr::new(10, 0, 0, 9),
            UNKNOWN.to_string(),
            UNKNOWN.to_string(),
            Vec::new(),
            DeviceType::NetworkDevice,
            vec!["✅ No major security concerns detected".to_string()],
        );

        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["openPorts"], serde_json::json!([]));
        assert_eq!(value["portCount"], 0);

        let parsed: Device = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, device);
    }
}
