//! Reverse DNS lookups for discovered hosts.

use crate::error::{ScanError, ScanResult};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// PTR resolver backed by the system resolver configuration.
pub struct ReverseResolver {
    resolver: TokioAsyncResolver,
}

impl ReverseResolver {
    /// Build from `/etc/resolv.conf` (or the platform equivalent), falling
    /// back to the default public configuration when that cannot be read.
    pub fn from_system(timeout: Duration) -> Self {
        let (config, mut opts) = match trust_dns_resolver::system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                debug!("system resolver config unavailable ({}), using defaults", e);
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        opts.timeout = timeout;
        opts.attempts = 1;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }

    /// Look up the PTR name for an address.
    ///
    /// `Ok(None)` means the address has no usable name.
    pub async fn lookup(&self, ip: Ipv4Addr) -> ScanResult<Option<String>> {
        let response = self
            .resolver
            .reverse_lookup(IpAddr::V4(ip))
            .await
            .map_err(|e| ScanError::DnsResolution(e.to_string()))?;

        Ok(response
            .iter()
            .find_map(|name| normalize_hostname(&name.to_string(), ip)))
    }
}

/// Strip the root dot; reject empty names and names equal to the address.
pub fn normalize_hostname(name: &str, ip: Ipv4Addr) -> Option<String> {
    let trimmed = name.trim().trim_end_matches('.');
    if trimmed.is_empty() || trimmed == ip.to_string() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hostname() {
        let ip = Ipv4Addr::new(10, 0, 0, 5);
        assert_eq!(normalize_hostname("nas.lan.", ip).as_deref(), Some("nas.lan"));
        assert_eq!(normalize_hostname("printer", ip).as_deref(), Some("printer"));
        assert_eq!(normalize_hostname("10.0.0.5", ip), None);
        assert_eq!(normalize_hostname("10.0.0.5.", ip), None);
        assert_eq!(normalize_hostname(".", ip), None);
    }

    #[tokio::test]
    async fn test_resolver_builds() {
        let resolver = ReverseResolver::from_system(Duration::from_millis(200));
        // TEST-NET-1 has no PTR records; either an error or no name is fine
        let result = resolver.lookup(Ipv4Addr::new(192, 0, 2, 1)).await;
        assert!(!matches!(result, Ok(Some(_))));
    }
}
