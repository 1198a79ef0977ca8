//! Device type inference from hostname and open ports.
//!
//! Rules are evaluated top to bottom and the first match wins: hostname
//! keywords, then port signatures, then a fallback on the open-port count.
//! There is no confidence scoring.

use crate::types::PortResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Best-effort device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "Router/Gateway")]
    Router,
    #[serde(rename = "Printer")]
    Printer,
    #[serde(rename = "Network Storage")]
    NetworkStorage,
    #[serde(rename = "Security Camera")]
    SecurityCamera,
    #[serde(rename = "IP Phone")]
    IpPhone,
    #[serde(rename = "Network Printer")]
    NetworkPrinter,
    #[serde(rename = "Windows Computer")]
    WindowsComputer,
    #[serde(rename = "Linux Server")]
    LinuxServer,
    #[serde(rename = "Web Server")]
    WebServer,
    #[serde(rename = "Computer (VNC)")]
    VncComputer,
    #[serde(rename = "Server/Network Device")]
    Server,
    #[serde(rename = "Computer/Device")]
    Computer,
    #[serde(rename = "Network Device")]
    NetworkDevice,
}

impl DeviceType {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Router => "Router/Gateway",
            Self::Printer => "Printer",
            Self::NetworkStorage => "Network Storage",
            Self::SecurityCamera => "Security Camera",
            Self::IpPhone => "IP Phone",
            Self::NetworkPrinter => "Network Printer",
            Self::WindowsComputer => "Windows Computer",
            Self::LinuxServer => "Linux Server",
            Self::WebServer => "Web Server",
            Self::VncComputer => "Computer (VNC)",
            Self::Server => "Server/Network Device",
            Self::Computer => "Computer/Device",
            Self::NetworkDevice => "Network Device",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hostname keyword sets, checked as lowercase substrings.
const HOSTNAME_RULES: &[(&[&str], DeviceType)] = &[
    (&["router", "gateway"], DeviceType::Router),
    (&["printer", "hp", "canon"], DeviceType::Printer),
    (&["nas", "synology", "qnap"], DeviceType::NetworkStorage),
    (&["camera", "ipcam"], DeviceType::SecurityCamera),
    (&["phone", "voip"], DeviceType::IpPhone),
];

/// Port signature: every listed port open, or at least one open.
enum Signature {
    All(&'static [u16]),
    Any(&'static [u16]),
}

impl Signature {
    fn matches(&self, open: &BTreeSet<u16>) -> bool {
        match self {
            Self::All(ports) => ports.iter().all(|p| open.contains(p)),
            Self::Any(ports) => ports.iter().any(|p| open.contains(p)),
        }
    }
}

/// Open-port signatures in priority order.
const PORT_RULES: &[(Signature, DeviceType)] = &[
    (Signature::All(&[9100]), DeviceType::NetworkPrinter),
    (Signature::All(&[3389]), DeviceType::WindowsComputer),
    (Signature::All(&[22, 80]), DeviceType::LinuxServer),
    (Signature::All(&[80, 443]), DeviceType::WebServer),
    (Signature::Any(&[445, 139]), DeviceType::WindowsComputer),
    (Signature::All(&[5900]), DeviceType::VncComputer),
];

/// Classify a device. Pure and total.
pub fn classify(hostname: &str, open_ports: &[PortResult]) -> DeviceType {
    let lower = hostname.to_lowercase();

    if let Some((_, device_type)) = HOSTNAME_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
    {
        return *device_type;
    }

    let ports: BTreeSet<u16> = open_ports.iter().map(|p| p.port.as_u16()).collect();
    if let Some((_, device_type)) = PORT_RULES.iter().find(|(sig, _)| sig.matches(&ports)) {
        return *device_type;
    }

    match open_ports.len() {
        n if n > 5 => DeviceType::Server,
        n if n > 2 => DeviceType::Computer,
        _ => DeviceType::NetworkDevice,
    }
}
