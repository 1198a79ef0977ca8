//! Network backend abstraction.
//!
//! Every blocking network call the host prober makes goes through
//! [`NetworkBackend`], so probing and aggregation can be exercised against
//! a scripted network in tests.

use crate::error::ScanResult;
use crate::types::Port;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Port connect timeout for LAN device scans.
pub const LAN_PORT_TIMEOUT: Duration = Duration::from_millis(800);
/// Host reachability timeout for LAN scans.
pub const REACHABILITY_TIMEOUT: Duration = Duration::from_millis(1500);

/// Outcome of a single port probe.
///
/// Refused, filtered and timed-out connects are all `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// A TCP handshake completed.
    Open,
    /// Anything else.
    Closed,
}

impl PortState {
    /// Check if the port is open.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Timeouts applied by the host prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTimeouts {
    /// Bound on the reachability test.
    pub reachability: Duration,
    /// Bound on each port connect.
    pub port: Duration,
}

impl ProbeTimeouts {
    /// Timeouts tuned for the local network.
    pub const fn lan() -> Self {
        Self {
            reachability: REACHABILITY_TIMEOUT,
            port: LAN_PORT_TIMEOUT,
        }
    }
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        Self::lan()
    }
}

/// The network operations a host probe is built from.
///
/// Implementations must bound every call by the given timeout (or an
/// internal one for lookups) so a single host cannot stall its task.
#[async_trait]
pub trait NetworkBackend: Send + Sync {
    /// Liveness test independent of port state.
    async fn is_reachable(&self, ip: Ipv4Addr, timeout: Duration) -> bool;

    /// Reverse DNS name, `Ok(None)` when the address has no name.
    async fn reverse_lookup(&self, ip: Ipv4Addr) -> ScanResult<Option<String>>;

    /// Hardware address if `ip` belongs to a local interface.
    fn hardware_address(&self, ip: Ipv4Addr) -> ScanResult<Option<String>>;

    /// One TCP connect attempt.
    async fn probe_port(&self, ip: Ipv4Addr, port: Port, timeout: Duration) -> PortState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_state_display() {
        assert_eq!(PortState::Open.to_string(), "open");
        assert_eq!(PortState::Closed.to_string(), "closed");
        assert!(PortState::Open.is_open());
        assert!(!PortState::Closed.is_open());
    }

    #[test]
    fn test_default_timeouts() {
        let lan = ProbeTimeouts::default();
        assert_eq!(lan.port, Duration::from_millis(800));
        assert_eq!(lan.reachability, Duration::from_millis(1500));
    }
}
