//! Scan report and local network snapshot.

use crate::types::Device;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Snapshot of the local interface a scan runs from.
///
/// When no interface qualifies, only `subnet` is set (to the fallback
/// prefix) and `fallback` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(rename = "localIP", default, skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<Ipv4Addr>,
    #[serde(rename = "networkInterface", default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    pub subnet: String,
    #[serde(rename = "subnetMask", default, skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(skip)]
    pub fallback: bool,
}

impl NetworkInfo {
    /// Snapshot derived from a real interface.
    pub fn detected(
        local_ip: Ipv4Addr,
        interface: impl Into<String>,
        subnet: impl Into<String>,
        subnet_mask: impl Into<String>,
    ) -> Self {
        Self {
            local_ip: Some(local_ip),
            interface: Some(interface.into()),
            subnet: subnet.into(),
            subnet_mask: Some(subnet_mask.into()),
            fallback: false,
        }
    }

    /// Snapshot carrying only a guessed subnet prefix.
    pub fn fallback(subnet: impl Into<String>) -> Self {
        Self {
            local_ip: None,
            interface: None,
            subnet: subnet.into(),
            subnet_mask: None,
            fallback: true,
        }
    }
}

/// Outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Success,
    Error,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Top-level scan result.
///
/// `devices` and `device_count` are absent on error reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_info: Option<NetworkInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_count: Option<usize>,
    pub timestamp: DateTime<Utc>,
    pub status: ScanStatus,
    pub message: String,
}

impl ScanReport {
    /// Build a successful report. Only reachable devices are kept.
    pub fn success(network_info: NetworkInfo, devices: Vec<Device>) -> Self {
        let devices: Vec<Device> = devices.into_iter().filter(|d| d.reachable).collect();
        let message = if network_info.fallback {
            format!(
                "Network scan completed using fallback subnet {} (no active interface detected)",
                network_info.subnet
            )
        } else {
            "Network scan completed successfully!".to_string()
        };

        Self {
            network_info: Some(network_info),
            device_count: Some(devices.len()),
            devices: Some(devices),
            timestamp: Utc::now(),
            status: ScanStatus::Success,
            message,
        }
    }

    /// Build an error report.
    pub fn error(network_info: Option<NetworkInfo>, message: impl Into<String>) -> Self {
        Self {
            network_info,
            devices: None,
            device_count: None,
            timestamp: Utc::now(),
            status: ScanStatus::Error,
            message: message.into(),
        }
    }

    /// Check if the scan completed.
    pub fn is_success(&self) -> bool {
        self.status == ScanStatus::Success
    }

    /// Reported devices, empty on error.
    pub fn devices(&self) -> &[Device] {
        self.devices.as_deref().unwrap_or_default()
    }
}
