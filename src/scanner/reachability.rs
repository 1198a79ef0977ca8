//! Host liveness test.
//!
//! Sends an ICMP echo when an ICMP socket can be opened. Without one it
//! falls back to a TCP connect on the echo port, where an active refusal
//! also proves the host is up.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use socket2::Type;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, ICMP};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

/// TCP echo service port, used when ICMP is unavailable.
const ECHO_PORT: u16 = 7;

const PING_PAYLOAD: [u8; 32] = [0; 32];

/// Reachability prober.
#[derive(Clone)]
pub struct ReachabilityProbe {
    icmp: Option<Arc<Client>>,
}

impl ReachabilityProbe {
    /// Open an ICMP client if the platform allows it.
    ///
    /// Root gets a raw socket; everyone else needs a datagram ICMP socket,
    /// which Linux only grants to groups inside `net.ipv4.ping_group_range`.
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let root = is_root();
        let mut last_error = None;

        for config in socket_configs(root) {
            match Client::new(&config) {
                Ok(client) => {
                    return Self {
                        icmp: Some(Arc::new(client)),
                    }
                }
                Err(e) => last_error = Some(e),
            }
        }

        if let Some(e) = last_error {
            debug!(
                "ICMP socket unavailable ({}), using TCP echo fallback; {}",
                e,
                icmp_hint(root)
            );
        }
        Self { icmp: None }
    }

    /// Prober that only uses the TCP fallback.
    pub fn tcp_only() -> Self {
        Self { icmp: None }
    }

    /// Whether ICMP echo is in use.
    pub fn uses_icmp(&self) -> bool {
        self.icmp.is_some()
    }

    /// Test whether `ip` answers within `limit`.
    pub async fn is_reachable(&self, ip: Ipv4Addr, limit: Duration) -> bool {
        match &self.icmp {
            Some(client) => icmp_echo(client, ip, limit).await,
            None => tcp_echo(ip, limit).await,
        }
    }
}

async fn icmp_echo(client: &Client, ip: Ipv4Addr, limit: Duration) -> bool {
    let mut pinger = client
        .pinger(IpAddr::V4(ip), PingIdentifier(rand::random()))
        .await;
    pinger.timeout(limit);

    match pinger.ping(PingSequence(0), &PING_PAYLOAD).await {
        Ok((_, rtt)) => {
            trace!("{} answered ICMP echo in {:?}", ip, rtt);
            true
        }
        Err(e) => {
            trace!("{} no ICMP reply: {}", ip, e);
            false
        }
    }
}

async fn tcp_echo(ip: Ipv4Addr, limit: Duration) -> bool {
    let addr = SocketAddr::new(IpAddr::V4(ip), ECHO_PORT);
    match timeout(limit, TcpStream::connect(addr)).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => true,
        Ok(Err(e)) => {
            trace!("{} echo connect failed: {}", ip, e);
            false
        }
        Err(_) => false,
    }
}

/// Socket kinds to try, most capable first.
fn socket_configs(root: bool) -> Vec<Config> {
    let mut configs = Vec::with_capacity(2);
    if root {
        configs.push(Config::builder().kind(ICMP::V4).sock_type_hint(Type::RAW).build());
    }
    configs.push(Config::builder().kind(ICMP::V4).sock_type_hint(Type::DGRAM).build());
    configs
}

fn icmp_hint(root: bool) -> &'static str {
    if root {
        "raw and datagram ICMP sockets were both refused"
    } else {
        "allow unprivileged ping via the net.ipv4.ping_group_range sysctl"
    }
}

/// Check if running with root privileges.
fn is_root() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_order_and_hint() {
        assert_eq!(socket_configs(true).len(), 2);
        assert_eq!(socket_configs(false).len(), 1);
        assert!(icmp_hint(false).contains("ping_group_range"));
        assert!(!icmp_hint(false).contains("root"));
    }

    #[tokio::test]
    async fn test_localhost_reachable_over_tcp() {
        // Loopback either accepts or refuses the echo port; both mean alive
        let probe = ReachabilityProbe::tcp_only();
        assert!(!probe.uses_icmp());
        assert!(
            probe
                .is_reachable(Ipv4Addr::LOCALHOST, Duration::from_millis(500))
                .await
        );
    }

    #[tokio::test]
    async fn test_icmp_client_optional() {
        // Succeeds with or without ICMP permission
        let probe = ReachabilityProbe::new();
        let _ = probe.uses_icmp();
    }
}
