//! Core type definitions.
//!
//! `Port` is a validated newtype; `Device` and `ScanReport` are the
//! serializable results handed to whatever renders or transports a scan.

mod device;
mod port;
mod report;

pub use device::{Device, PortResult, UNKNOWN};
pub use port::{Port, PortError};
pub use report::{NetworkInfo, ScanReport, ScanStatus};
pub use crate::services::RiskLevel;
