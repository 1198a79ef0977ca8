//! Hardware address lookup from the local interface table.
//!
//! Only addresses assigned to one of this machine's own interfaces resolve.
//! Other hosts on the LAN come back as `None`; the ARP cache is not read.

use super::interface::InterfaceSnapshot;
use std::net::Ipv4Addr;

/// Colon-separated upper-case hex, e.g. `00:1A:2B:3C:4D:5E`.
pub fn format_mac(octets: [u8; 6]) -> String {
    octets
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// MAC of the local interface that owns `ip`, if any.
pub fn hardware_address(interfaces: &[InterfaceSnapshot], ip: Ipv4Addr) -> Option<String> {
    interfaces
        .iter()
        .find(|iface| iface.ipv4.iter().any(|(addr, _)| *addr == ip))
        .and_then(|iface| iface.mac)
        .filter(|mac| mac.iter().any(|b| *b != 0))
        .map(format_mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(mac: Option<[u8; 6]>) -> Vec<InterfaceSnapshot> {
        vec![InterfaceSnapshot {
            name: "eth0".to_string(),
            display_name: "eth0".to_string(),
            is_up: true,
            is_loopback: false,
            is_virtual: false,
            mac,
            ipv4: vec![(Ipv4Addr::new(192, 168, 1, 10), 24)],
        }]
    }

    #[test]
    fn test_format_mac() {
        assert_eq!(format_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]), "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn test_local_address_resolves() {
        let interfaces = local(Some([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]));
        assert_eq!(
            hardware_address(&interfaces, Ipv4Addr::new(192, 168, 1, 10)).as_deref(),
            Some("DE:AD:BE:EF:00:01")
        );
    }

    #[test]
    fn test_peer_address_is_unknown() {
        let interfaces = local(Some([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]));
        assert!(hardware_address(&interfaces, Ipv4Addr::new(192, 168, 1, 11)).is_none());
    }

    #[test]
    fn test_missing_or_zero_mac() {
        let ip = Ipv4Addr::new(192, 168, 1, 10);
        assert!(hardware_address(&local(None), ip).is_none());
        assert!(hardware_address(&local(Some([0; 6])), ip).is_none());
    }
}
