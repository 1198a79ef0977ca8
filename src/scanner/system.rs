//! The real network backend.

use crate::error::ScanResult;
use crate::network::{self, InterfaceSnapshot, ReverseResolver};
use crate::scanner::reachability::ReachabilityProbe;
use crate::scanner::tcp::TcpConnectProbe;
use crate::scanner::traits::{NetworkBackend, PortState};
use crate::types::Port;
use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tokio::time::timeout;

/// Upper bound on a single reverse DNS lookup.
pub const DNS_TIMEOUT: Duration = Duration::from_millis(1500);

/// Backend talking to the operating system's network stack.
pub struct SystemNetwork {
    reachability: ReachabilityProbe,
    resolver: ReverseResolver,
    interfaces: Vec<InterfaceSnapshot>,
}

impl SystemNetwork {
    /// Build the backend. Must be called from within a tokio runtime.
    ///
    /// MAC lookups read `interfaces`, the same table the subnet was
    /// resolved from.
    pub fn new(interfaces: Vec<InterfaceSnapshot>) -> Self {
        Self {
            reachability: ReachabilityProbe::new(),
            resolver: ReverseResolver::from_system(DNS_TIMEOUT),
            interfaces,
        }
    }

    /// Whether reachability uses ICMP echo.
    pub fn uses_icmp(&self) -> bool {
        self.reachability.uses_icmp()
    }
}

#[async_trait]
impl NetworkBackend for SystemNetwork {
    async fn is_reachable(&self, ip: Ipv4Addr, limit: Duration) -> bool {
        self.reachability.is_reachable(ip, limit).await
    }

    async fn reverse_lookup(&self, ip: Ipv4Addr) -> ScanResult<Option<String>> {
        // resolver timeouts are per query; bound the whole lookup as well
        match timeout(DNS_TIMEOUT, self.resolver.lookup(ip)).await {
            Ok(result) => result,
            Err(_) => Ok(None),
        }
    }

    fn hardware_address(&self, ip: Ipv4Addr) -> ScanResult<Option<String>> {
        Ok(network::hardware_address(&self.interfaces, ip))
    }

    async fn probe_port(&self, ip: Ipv4Addr, port: Port, limit: Duration) -> PortState {
        TcpConnectProbe::new(limit).probe(IpAddr::V4(ip), port).await
    }
}
