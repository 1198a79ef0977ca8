//! # lanscout - Local Network Discovery and Service Audit
//!
//! lanscout sweeps the local IPv4 /24, probes a fixed table of well-known
//! TCP ports on every host that answers, guesses a device type from the
//! hostname and open ports, and attaches security notes for risky services.
//!
//! ## Features
//!
//! - **Subnet Resolution**: Picks the first active, non-virtual IPv4 interface,
//!   falling back to `192.168.1` when none qualifies
//! - **Bounded Concurrency**: A fixed pool of host probes, each with its own deadline
//! - **Reachability**: ICMP echo when permitted, TCP echo otherwise
//! - **Classification**: Hostname keywords first, then port signatures
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use lanscout::network::{InterfaceSource, SystemInterfaces};
//! use lanscout::scanner::{run_scan, ScanConfig, SystemNetwork};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let table = SystemInterfaces.interfaces().unwrap();
//!     let backend = SystemNetwork::new(table.clone());
//!     let report = run_scan(&table, Arc::new(backend), &ScanConfig::default()).await;
//!
//!     for device in report.devices() {
//!         println!("{} {:?}", device.ip, device.device_type);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Ports, devices and the scan report
//! - [`services`] - The well-known port table
//! - [`network`] - Interface selection, MAC lookup and reverse DNS
//! - [`scanner`] - Probes, the host prober and the scan coordinator
//! - [`analysis`] - Device classification and security assessment
//! - [`config`] - Settings storage
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use analysis::DeviceType;
pub use error::{CliError, ConfigError, ScanError};
pub use scanner::{run_scan, HostProber, NetworkBackend, ScanConfig};
pub use types::{Device, NetworkInfo, Port, PortResult, ScanReport};
