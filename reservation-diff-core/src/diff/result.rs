use serde::Serialize;

/// A (mac, ip) pair present in one input only, with the source line from
/// the input that has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub mac: String,
    pub ip: String,
    pub source_line: String,
}

/// A mac present in both inputs with differing ips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpMismatch {
    pub mac: String,
    pub left_ip: String,
    pub right_ip: String,
}

/// An ip present in both inputs with differing macs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacMismatch {
    pub ip: String,
    pub left_mac: String,
    pub right_mac: String,
}

/// Outcome of comparing two record sets.
///
/// Ordering is part of the contract: ip-keyed lists sort ascending by octet
/// value, mac-keyed lists sort ascending lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// (mac, ip) pairs identical in both inputs, sorted by mac.
    pub matching: Vec<(String, String)>,
    /// Pairs present in the right input only, sorted by ip.
    pub missing_in_left: Vec<MissingEntry>,
    /// Pairs present in the left input only, sorted by ip.
    pub missing_in_right: Vec<MissingEntry>,
    /// Macs bound to different ips across the inputs, sorted by mac.
    pub ip_mismatches: Vec<IpMismatch>,
    /// Ips bound to different macs across the inputs, sorted by ip.
    pub mac_mismatches: Vec<MacMismatch>,
}
