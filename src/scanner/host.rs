//! Single-host probe.
//!
//! Reachability first; a silent host stops there. Reachable hosts get a
//! hostname, a best-effort MAC, a sequential sweep of the service table and
//! then classification and assessment. Lookup failures only degrade their
//! own field to "Unknown".

use crate::analysis;
use crate::scanner::traits::{NetworkBackend, ProbeTimeouts};
use crate::services::PORT_TABLE;
use crate::types::{Device, PortResult, UNKNOWN};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// Probes one address at a time against a [`NetworkBackend`].
pub struct HostProber {
    network: Arc<dyn NetworkBackend>,
    timeouts: ProbeTimeouts,
}

impl HostProber {
    /// Create a prober.
    pub fn new(network: Arc<dyn NetworkBackend>, timeouts: ProbeTimeouts) -> Self {
        Self { network, timeouts }
    }

    /// Probe one address.
    pub async fn probe_host(&self, ip: Ipv4Addr) -> Device {
        if !self
            .network
            .is_reachable(ip, self.timeouts.reachability)
            .await
        {
            return Device::unreachable(ip);
        }
        debug!("{} is reachable", ip);

        let hostname = match self.network.reverse_lookup(ip).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN.to_string(),
            Err(e) => {
                debug!("{} hostname lookup failed: {}", ip, e);
                UNKNOWN.to_string()
            }
        };

        let mac_address = match self.network.hardware_address(ip) {
            Ok(Some(mac)) => mac,
            Ok(None) => UNKNOWN.to_string(),
            Err(e) => {
                debug!("{} hardware address lookup failed: {}", ip, e);
                UNKNOWN.to_string()
            }
        };

        let open_ports = self.scan_ports(ip).await;
        let device_type = analysis::classify(&hostname, &open_ports);
        let security_notes = analysis::assess(&open_ports);

        debug!(
            "{} ({}) classified as {} with {} open ports",
            ip,
            hostname,
            device_type,
            open_ports.len()
        );

        Device::reachable(
            ip,
            hostname,
            mac_address,
            open_ports,
            device_type,
            security_notes,
        )
    }

    /// Probe the service table in order, keeping open ports.
    async fn scan_ports(&self, ip: Ipv4Addr) -> Vec<PortResult> {
        let mut open = Vec::new();
        for service in PORT_TABLE.iter() {
            let state = self
                .network
                .probe_port(ip, service.port, self.timeouts.port)
                .await;
            if state.is_open() {
                open.push(PortResult::from(service));
            }
        }
        open
    }
}
