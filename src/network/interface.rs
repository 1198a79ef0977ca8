//! Local interface detection and subnet derivation.

use crate::error::{ScanError, ScanResult};
use crate::types::NetworkInfo;
use ipnetwork::Ipv4Network;
use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;
use tracing::{debug, warn};

/// Prefix scanned when no interface qualifies.
pub const FALLBACK_SUBNET: &str = "192.168.1";

/// Name prefixes of bridges, tunnels and hypervisor adapters.
const VIRTUAL_NAME_PREFIXES: &[&str] = &[
    "docker", "br-", "veth", "virbr", "vmnet", "vboxnet", "tun", "tap", "wg", "utun", "zt",
];

/// Adapter description fragments used on Windows, where names are GUIDs.
const VIRTUAL_DESCRIPTIONS: &[&str] = &[
    "hyper-v", "vethernet", "vmware", "virtualbox", "wsl", "docker", "tap-windows", "wireguard",
];

/// Plain-data view of one network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub display_name: String,
    pub is_up: bool,
    pub is_loopback: bool,
    pub is_virtual: bool,
    pub mac: Option<[u8; 6]>,
    pub ipv4: Vec<(Ipv4Addr, u8)>,
}

impl InterfaceSnapshot {
    /// Whether this interface may be used to pick the scan subnet.
    pub fn is_candidate(&self) -> bool {
        self.is_up && !self.is_loopback && !self.is_virtual
    }

    /// First usable IPv4 address and its prefix length.
    pub fn usable_ipv4(&self) -> Option<(Ipv4Addr, u8)> {
        self.ipv4
            .iter()
            .copied()
            .find(|(ip, _)| !ip.is_loopback() && !ip.is_unspecified())
    }
}

impl From<&datalink::NetworkInterface> for InterfaceSnapshot {
    fn from(iface: &datalink::NetworkInterface) -> Self {
        let name_lower = iface.name.to_lowercase();
        let description_lower = iface.description.to_lowercase();
        // alias interfaces ("eth0:1") count as virtual
        let is_virtual = iface.is_point_to_point()
            || iface.name.contains(':')
            || VIRTUAL_NAME_PREFIXES.iter().any(|p| name_lower.starts_with(p))
            || VIRTUAL_DESCRIPTIONS.iter().any(|p| description_lower.contains(p));

        let ipv4 = iface
            .ips
            .iter()
            .filter_map(|net| match net {
                IpNetwork::V4(v4) => Some((v4.ip(), v4.prefix())),
                IpNetwork::V6(_) => None,
            })
            .collect();

        let display_name = if iface.description.trim().is_empty() {
            iface.name.clone()
        } else {
            iface.description.clone()
        };

        Self {
            name: iface.name.clone(),
            display_name,
            is_up: iface.is_up(),
            is_loopback: iface.is_loopback(),
            is_virtual,
            mac: iface.mac.map(|m| m.octets()),
            ipv4,
        }
    }
}

/// Source of interface snapshots.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> ScanResult<Vec<InterfaceSnapshot>>;
}

/// A table captured earlier replays unchanged.
impl InterfaceSource for Vec<InterfaceSnapshot> {
    fn interfaces(&self) -> ScanResult<Vec<InterfaceSnapshot>> {
        Ok(self.clone())
    }
}

/// Reads interfaces from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> ScanResult<Vec<InterfaceSnapshot>> {
        let interfaces: Vec<InterfaceSnapshot> =
            datalink::interfaces().iter().map(InterfaceSnapshot::from).collect();
        debug!("enumerated {} network interfaces", interfaces.len());
        Ok(interfaces)
    }
}

/// Network portion of an address as 1-3 dotted octets.
pub fn subnet_prefix(ip: Ipv4Addr, prefix_len: u8) -> String {
    let [a, b, c, _] = ip.octets();
    if prefix_len >= 24 {
        format!("{a}.{b}.{c}")
    } else if prefix_len >= 16 {
        format!("{a}.{b}")
    } else {
        format!("{a}")
    }
}

/// Dotted-quad mask for a prefix length (clamped to 32).
pub fn subnet_mask(prefix_len: u8) -> String {
    Ipv4Network::new(Ipv4Addr::UNSPECIFIED, prefix_len.min(32))
        .map(|net| net.mask().to_string())
        .unwrap_or_else(|_| Ipv4Addr::BROADCAST.to_string())
}

/// Pick the first qualifying interface.
pub fn find_interface(interfaces: &[InterfaceSnapshot]) -> ScanResult<NetworkInfo> {
    interfaces
        .iter()
        .filter(|iface| {
            if !iface.is_candidate() {
                debug!(
                    "skipping interface {} (up: {}, loopback: {}, virtual: {})",
                    iface.name, iface.is_up, iface.is_loopback, iface.is_virtual
                );
            }
            iface.is_candidate()
        })
        .find_map(|iface| {
            let (ip, prefix_len) = iface.usable_ipv4()?;
            debug!("selected interface {} ({}/{})", iface.name, ip, prefix_len);
            Some(NetworkInfo::detected(
                ip,
                iface.display_name.clone(),
                subnet_prefix(ip, prefix_len),
                subnet_mask(prefix_len),
            ))
        })
        .ok_or(ScanError::NoInterfaceFound)
}

/// Resolve the local network, falling back to [`FALLBACK_SUBNET`].
///
/// Only an interface enumeration failure is an error.
pub fn resolve(source: &dyn InterfaceSource) -> ScanResult<NetworkInfo> {
    let interfaces = source.interfaces()?;
    match find_interface(&interfaces) {
        Ok(info) => Ok(info),
        Err(_) => {
            warn!(
                "no active IPv4 interface found; assuming subnet {}",
                FALLBACK_SUBNET
            );
            Ok(NetworkInfo::fallback(FALLBACK_SUBNET))
        }
    }
}

/// Host addresses `prefix.1` through `prefix.254`.
///
/// Short prefixes zero-fill the missing octets, so "10.0" yields
/// 10.0.0.1 through 10.0.0.254.
pub fn candidate_hosts(prefix: &str) -> ScanResult<Vec<Ipv4Addr>> {
    let invalid = || ScanError::InvalidSubnet(prefix.to_string());

    let octets = prefix
        .trim()
        .split('.')
        .map(|part| part.parse::<u8>().map_err(|_| invalid()))
        .collect::<ScanResult<Vec<u8>>>()?;

    let (a, b, c) = match octets.as_slice() {
        [a] => (*a, 0, 0),
        [a, b] => (*a, *b, 0),
        [a, b, c] => (*a, *b, *c),
        _ => return Err(invalid()),
    };

    Ok((1..=254).map(|host| Ipv4Addr::new(a, b, c, host)).collect())
}
