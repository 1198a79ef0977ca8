//! Scanner module - coordinates a subnet sweep.
//!
//! The coordinator resolves the local subnet once, fans one host probe out
//! per candidate address under a bounded pool, and assembles the reachable
//! hosts into a [`ScanReport`]. A host that errors or misses its deadline
//! is dropped without failing the scan.

pub mod host;
pub mod reachability;
pub mod system;
pub mod tcp;
pub mod traits;

use crate::error::ScanError;
use crate::network::{self, InterfaceSource};
use crate::types::{Device, ScanReport};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

pub use host::HostProber;
pub use reachability::ReachabilityProbe;
pub use system::SystemNetwork;
pub use tcp::TcpConnectProbe;
pub use traits::{NetworkBackend, PortState, ProbeTimeouts};

/// Default number of hosts probed at once.
pub const DEFAULT_CONCURRENCY: usize = 50;
/// Default time a host probe may run once it holds a pool slot.
pub const DEFAULT_HOST_DEADLINE: Duration = Duration::from_secs(2);

/// Configuration for a subnet sweep.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum concurrent host probes.
    pub concurrency: usize,
    /// Per-host collection deadline, measured from when the probe starts.
    pub host_deadline: Duration,
    /// Timeouts used inside each host probe.
    pub timeouts: ProbeTimeouts,
    /// Show a progress bar on stderr.
    pub show_progress: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            host_deadline: DEFAULT_HOST_DEADLINE,
            timeouts: ProbeTimeouts::lan(),
            show_progress: false,
        }
    }
}

impl ScanConfig {
    /// Set the pool capacity (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the per-host deadline.
    pub fn with_host_deadline(mut self, deadline: Duration) -> Self {
        self.host_deadline = deadline;
        self
    }

    /// Set the probe timeouts.
    pub fn with_timeouts(mut self, timeouts: ProbeTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Enable the progress bar.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }
}

/// Execute a complete subnet scan.
///
/// Never fails: an undeterminable subnet yields an error report.
pub async fn run_scan(
    interfaces: &dyn InterfaceSource,
    network: Arc<dyn NetworkBackend>,
    config: &ScanConfig,
) -> ScanReport {
    let start_time = Instant::now();

    let network_info = match network::resolve(interfaces) {
        Ok(info) => info,
        Err(e) => return resolution_failed(&e),
    };

    let hosts = match network::candidate_hosts(&network_info.subnet) {
        Ok(hosts) => hosts,
        Err(e) => {
            error!("{}", e);
            return ScanReport::error(
                Some(network_info),
                "Could not determine local network subnet",
            );
        }
    };

    info!(
        "scanning {} hosts on {}.x with {} workers",
        hosts.len(),
        network_info.subnet,
        config.concurrency
    );

    let prober = Arc::new(HostProber::new(network, config.timeouts));
    let devices = probe_hosts(hosts, prober, config).await;

    info!(
        "scan finished in {:.2}s: {} devices",
        start_time.elapsed().as_secs_f64(),
        devices.len()
    );

    ScanReport::success(network_info, devices)
}

/// Error report for a scan whose interface table could not be read.
pub fn resolution_failed(e: &ScanError) -> ScanReport {
    error!("network resolution failed: {}", e);
    ScanReport::error(None, format!("Error scanning network: {e}"))
}

/// Probe every address under a bounded pool, returning reachable devices
/// sorted by address.
pub async fn probe_hosts(
    hosts: Vec<Ipv4Addr>,
    prober: Arc<HostProber>,
    config: &ScanConfig,
) -> Vec<Device> {
    let total = hosts.len();
    let progress = config.show_progress.then(|| new_progress_bar(total as u64));

    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let deadline = config.host_deadline;

    let results: Vec<Option<Device>> = stream::iter(hosts)
        .map(|ip| {
            let sem = Arc::clone(&semaphore);
            let prober = Arc::clone(&prober);
            let progress = progress.clone();

            async move {
                let permit = sem.acquire_owned().await.ok()?;

                // spawned so a panicking probe only loses its own host
                let handle = tokio::spawn(async move {
                    let _permit = permit;
                    timeout(deadline, prober.probe_host(ip)).await
                });

                let outcome = match handle.await {
                    Ok(Ok(device)) => Some(device),
                    Ok(Err(_)) => {
                        debug!("{} dropped: no result within {:?}", ip, deadline);
                        None
                    }
                    Err(e) => {
                        warn!("{} probe task failed: {}", ip, e);
                        None
                    }
                };

                if let Some(ref pb) = progress {
                    pb.inc(1);
                    if let Some(device) = outcome.as_ref().filter(|d| d.reachable) {
                        pb.set_message(format!("Found host: {}", device.ip));
                    }
                }

                outcome
            }
        })
        .buffer_unordered(total.max(1)) // the semaphore sets actual concurrency
        .collect()
        .await;

    if let Some(pb) = progress {
        pb.finish_with_message("Scan complete");
    }

    let mut devices: Vec<Device> = results
        .into_iter()
        .flatten()
        .filter(|d| d.reachable)
        .collect();
    devices.sort_by_key(|d| d.ip);
    devices
}

fn new_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
