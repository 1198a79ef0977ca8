//! Local network introspection: interface selection, subnet enumeration,
//! hardware addresses and reverse DNS.

pub mod dns;
pub mod interface;
pub mod mac;

pub use dns::ReverseResolver;
pub use interface::{
    candidate_hosts, find_interface, resolve, subnet_mask, subnet_prefix, InterfaceSnapshot,
    InterfaceSource, SystemInterfaces, FALLBACK_SUBNET,
};
pub use mac::{format_mac, hardware_address};
