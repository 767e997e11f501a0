use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::record::{ip_sort_key, RecordSet};

/// Errors that can occur while writing a reservations file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the output file.
    #[error("failed to write reservations file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`RecordSet`] into one-line host blocks, ordered by ip.
///
/// The output parses back into an identical mac→ip / ip→mac mapping. Host
/// names are derived from the mac so they stay unique within the set.
pub fn render(set: &RecordSet) -> String {
    let mut pairs: Vec<(&str, &str)> = set.iter().collect();
    pairs.sort_by_key(|(_, ip)| ip_sort_key(ip));

    let mut out = String::new();
    for (mac, ip) in pairs {
        let name = mac.replace(':', "").to_lowercase();
        out.push_str(&format!(
            "host h_{name} {{ hardware ethernet {mac}; fixed-address {ip}; }}\n"
        ));
    }
    out
}

/// Serialize a [`RecordSet`] and write it to `path`.
pub fn write_file(set: &RecordSet, path: &Path) -> Result<(), WriteError> {
    fs::write(path, render(set))?;
    Ok(())
}
