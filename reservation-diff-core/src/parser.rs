use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::record::{HostRecord, RecordSet};

static MAC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hardware\s+ethernet\s+([0-9A-Fa-f:]+)\s*;").expect("invalid mac regex")
});

static IP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fixed-address\s+([0-9.]+)\s*;").expect("invalid ip regex"));

static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"host\s+\w+\s*\{\s*hardware\s+ethernet\s+[0-9A-Fa-f:]+\s*;\s*fixed-address\s+[0-9.]+\s*;\s*\}",
    )
    .expect("invalid host block regex")
});

/// Errors that can occur while reading reservation files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file.
    #[error("failed to read reservations file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse dhcpd-style text into a [`RecordSet`].
///
/// Scans line by line with any trailing `#` comment stripped. A line
/// contributes a record only when both the hardware-address and the
/// fixed-address pattern match that same line; the mac is uppercased for
/// canonical storage. Lines matching one or neither pattern are skipped,
/// and duplicate keys overwrite earlier records.
pub fn parse(text: &str) -> RecordSet {
    let mut set = RecordSet::new();

    for line in text.lines() {
        let without_comment = line.split('#').next().unwrap_or("");
        let mac = MAC_REGEX.captures(without_comment);
        let ip = IP_REGEX.captures(without_comment);

        if let (Some(mac), Some(ip)) = (mac, ip) {
            set.insert(HostRecord {
                mac: mac[1].to_uppercase(),
                ip: ip[1].to_string(),
                source_line: line.trim().to_string(),
            });
        }
    }

    set
}

/// Parse a reservations file into a [`RecordSet`].
pub fn parse_file(path: &Path) -> Result<RecordSet, ParseError> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Count lines containing a complete one-line host reservation block
/// (`host <name> { hardware ethernet <mac>; fixed-address <ip>; }`).
///
/// Used as the sanity gate before a fetched payload may replace the managed
/// file: fewer than one complete block means the payload is empty or
/// garbled.
pub fn count_reservation_blocks(text: &str) -> usize {
    text.lines().filter(|line| BLOCK_REGEX.is_match(line)).count()
}
