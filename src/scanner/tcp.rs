//! TCP connect port probe.
//!
//! Uses the operating system's socket API to complete a full handshake.
//! Does not require elevated privileges. The socket is dropped as soon as
//! the handshake completes and nothing is ever sent.

use crate::scanner::traits::{PortState, LAN_PORT_TIMEOUT};
use crate::types::Port;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Single-attempt TCP connect probe.
#[derive(Debug, Clone, Copy)]
pub struct TcpConnectProbe {
    timeout: Duration,
}

impl TcpConnectProbe {
    /// Create a probe with an explicit connect timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Probe tuned for LAN devices (800 ms).
    pub fn lan() -> Self {
        Self::new(LAN_PORT_TIMEOUT)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attempt one connect. No retries.
    pub async fn probe(&self, target: IpAddr, port: Port) -> PortState {
        connect_state(SocketAddr::new(target, port.as_u16()), self.timeout).await
    }
}

impl Default for TcpConnectProbe {
    fn default() -> Self {
        Self::lan()
    }
}

/// Connect to `addr` within `limit`; only a completed handshake is open.
async fn connect_state(addr: SocketAddr, limit: Duration) -> PortState {
    match timeout(limit, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            PortState::Open
        }
        Ok(Err(e)) => {
            trace!("{} closed: {}", addr, e);
            PortState::Closed
        }
        Err(_) => {
            trace!("{} timed out after {:?}", addr, limit);
            PortState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tokio::net::TcpListener;

    #[test]
    fn test_probe_creation() {
        assert_eq!(TcpConnectProbe::default().timeout(), Duration::from_millis(800));
        assert_eq!(TcpConnectProbe::new(Duration::from_millis(250)).timeout(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = Port::new(listener.local_addr().unwrap().port()).unwrap();

        let probe = TcpConnectProbe::new(Duration::from_millis(500));
        let state = probe.probe(IpAddr::V4(Ipv4Addr::LOCALHOST), port).await;
        assert_eq!(state, PortState::Open);
    }

    #[tokio::test]
    async fn test_closed_port() {
        // Bind then release a port so nothing listens on it
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = Port::new(listener.local_addr().unwrap().port()).unwrap();
        drop(listener);

        let probe = TcpConnectProbe::new(Duration::from_millis(200));
        let state = probe.probe(IpAddr::V4(Ipv4Addr::LOCALHOST), port).await;
        assert_eq!(state, PortState::Closed);
    }
}
