//! JSON output formatting.

use crate::types::ScanReport;
use std::io::{self, Write};

/// Print a report in JSON format.
pub fn print_json(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, report)
}

/// Write a report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::other)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NetworkInfo;

    #[test]
    fn test_json_output_parses_back() {
        let report = ScanReport::success(NetworkInfo::fallback("192.168.1"), Vec::new());
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let parsed: ScanReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.device_count, Some(0));
        assert_eq!(parsed.network_info.unwrap().subnet, "192.168.1");
    }
}
