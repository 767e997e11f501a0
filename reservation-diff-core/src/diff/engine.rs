use crate::diff::result::{ComparisonResult, IpMismatch, MacMismatch, MissingEntry};
use crate::record::{ip_sort_key, RecordSet};

/// Compare two record sets.
///
/// Matching pairs are the intersection of exact (mac, ip) pairs. A pair
/// present in only one input lands in the opposite side's missing list with
/// the source line of the input that has it. Keys present in both inputs
/// with differing values are reported as mismatches. Swapping the operands
/// swaps the missing lists and reverses the operand order inside each
/// mismatch, but leaves the mismatch key sets unchanged.
pub fn compare(left: &RecordSet, right: &RecordSet) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    // mac-keyed walks inherit ascending mac order from the record set.
    for (mac, ip) in left.iter() {
        if right.contains_pair(mac, ip) {
            result.matching.push((mac.to_string(), ip.to_string()));
        } else {
            result.missing_in_right.push(missing_entry(left, mac, ip));
        }

        if let Some(right_ip) = right.ip_for(mac) {
            if right_ip != ip {
                result.ip_mismatches.push(IpMismatch {
                    mac: mac.to_string(),
                    left_ip: ip.to_string(),
                    right_ip: right_ip.to_string(),
                });
            }
        }
    }

    for (mac, ip) in right.iter() {
        if !left.contains_pair(mac, ip) {
            result.missing_in_left.push(missing_entry(right, mac, ip));
        }
    }

    for (ip, mac) in left.iter_by_ip() {
        if let Some(right_mac) = right.mac_for(ip) {
            if right_mac != mac {
                result.mac_mismatches.push(MacMismatch {
                    ip: ip.to_string(),
                    left_mac: mac.to_string(),
                    right_mac: right_mac.to_string(),
                });
            }
        }
    }

    result.missing_in_left.sort_by_key(|entry| ip_sort_key(&entry.ip));
    result.missing_in_right.sort_by_key(|entry| ip_sort_key(&entry.ip));
    result.mac_mismatches.sort_by_key(|entry| ip_sort_key(&entry.ip));

    result
}

fn missing_entry(owner: &RecordSet, mac: &str, ip: &str) -> MissingEntry {
    MissingEntry {
        mac: mac.to_string(),
        ip: ip.to_string(),
        source_line: owner.line_for_mac(mac).unwrap_or_default().to_string(),
    }
}
