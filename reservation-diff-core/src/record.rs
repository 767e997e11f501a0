use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use serde::Serialize;

/// A single MAC-to-IP host reservation with source-line provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    /// Hardware address in canonical form (uppercase, colon-separated hex).
    pub mac: String,
    /// IPv4 address in dotted-quad text form.
    pub ip: String,
    /// Trimmed original line the record was parsed from.
    pub source_line: String,
}

/// A parsed set of host reservations.
///
/// Holds four mappings built in one parse pass: mac→ip, ip→mac, and the
/// source line keyed by either side. Within one set each mac has exactly one
/// ip and each ip has exactly one mac; inserting a duplicate key overwrites
/// the earlier record (last occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    mac_to_ip: BTreeMap<String, String>,
    ip_to_mac: BTreeMap<String, String>,
    mac_to_line: BTreeMap<String, String>,
    ip_to_line: BTreeMap<String, String>,
}

impl RecordSet {
    /// Create an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Existing records with the same mac or ip are
    /// overwritten silently.
    pub fn insert(&mut self, record: HostRecord) {
        self.mac_to_ip.insert(record.mac.clone(), record.ip.clone());
        self.ip_to_mac.insert(record.ip.clone(), record.mac.clone());
        self.mac_to_line
            .insert(record.mac, record.source_line.clone());
        self.ip_to_line.insert(record.ip, record.source_line);
    }

    /// Return the ip bound to `mac`, if any.
    pub fn ip_for(&self, mac: &str) -> Option<&str> {
        self.mac_to_ip.get(mac).map(String::as_str)
    }

    /// Return the mac bound to `ip`, if any.
    pub fn mac_for(&self, ip: &str) -> Option<&str> {
        self.ip_to_mac.get(ip).map(String::as_str)
    }

    /// Return the source line for `mac`, if any.
    pub fn line_for_mac(&self, mac: &str) -> Option<&str> {
        self.mac_to_line.get(mac).map(String::as_str)
    }

    /// Return the source line for `ip`, if any.
    pub fn line_for_ip(&self, ip: &str) -> Option<&str> {
        self.ip_to_line.get(ip).map(String::as_str)
    }

    /// Whether the exact (mac, ip) pair is present.
    pub fn contains_pair(&self, mac: &str, ip: &str) -> bool {
        self.ip_for(mac) == Some(ip)
    }

    /// Iterate all (mac, ip) pairs in ascending mac order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.mac_to_ip
            .iter()
            .map(|(mac, ip)| (mac.as_str(), ip.as_str()))
    }

    /// Iterate all (ip, mac) pairs in ascending lexicographic ip order.
    pub fn iter_by_ip(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.ip_to_mac
            .iter()
            .map(|(ip, mac)| (ip.as_str(), mac.as_str()))
    }

    /// Number of distinct macs in the set.
    pub fn len(&self) -> usize {
        self.mac_to_ip.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.mac_to_ip.is_empty()
    }
}

/// Numeric ordering key for dotted-quad IPv4 text.
///
/// Orders by the four octet values rather than lexicographically, so
/// `10.0.0.9` sorts before `10.0.0.10`. Strings that do not parse as an
/// IPv4 address order after every valid address.
pub fn ip_sort_key(ip: &str) -> u64 {
    ip.parse::<Ipv4Addr>()
        .map(|addr| u64::from(u32::from(addr)))
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::{ip_sort_key, HostRecord, RecordSet};

    fn record(mac: &str, ip: &str) -> HostRecord {
        HostRecord {
            mac: mac.to_string(),
            ip: ip.to_string(),
            source_line: format!("hardware ethernet {mac}; fixed-address {ip};"),
        }
    }

    #[test]
    fn insert_overwrites_duplicate_mac() {
        let mut set = RecordSet::new();
        set.insert(record("AA:BB:CC:DD:EE:FF", "10.0.0.1"));
        set.insert(record("AA:BB:CC:DD:EE:FF", "10.0.0.2"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.ip_for("AA:BB:CC:DD:EE:FF"), Some("10.0.0.2"));
    }

    #[test]
    fn ip_sort_key_orders_by_octets() {
        assert!(ip_sort_key("10.0.0.9") < ip_sort_key("10.0.0.10"));
        assert!(ip_sort_key("2.0.0.1") < ip_sort_key("10.0.0.1"));
        assert!(ip_sort_key("255.255.255.255") < ip_sort_key("not-an-ip"));
    }
}
