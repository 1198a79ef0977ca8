//! Heuristics applied to raw probe results.

mod classifier;
mod security;

pub use classifier::{classify, DeviceType};
pub use security::{assess, FTP_WARNING, NO_CONCERNS, RDP_NOTICE, TELNET_WARNING};
