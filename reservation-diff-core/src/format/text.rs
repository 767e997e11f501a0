use crate::diff::ComparisonResult;

/// Format a comparison result as plain text.
///
/// Section order is fixed: missing-in-first, missing-in-second, ip
/// mismatches, mac mismatches, then the summary counts. Empty sections
/// print `None`.
pub fn format_text(result: &ComparisonResult, left_label: &str, right_label: &str) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Missing in {left_label} (present in {right_label}, not in {left_label}):"
    ));
    if result.missing_in_left.is_empty() {
        lines.push("None".to_string());
    } else {
        for entry in &result.missing_in_left {
            lines.push(entry.source_line.clone());
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "Missing in {right_label} (present in {left_label}, not in {right_label}):"
    ));
    if result.missing_in_right.is_empty() {
        lines.push("None".to_string());
    } else {
        for entry in &result.missing_in_right {
            lines.push(entry.source_line.clone());
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "IP mismatches (same MAC, different IPs) between {left_label} and {right_label}:"
    ));
    if result.ip_mismatches.is_empty() {
        lines.push("None".to_string());
    } else {
        for entry in &result.ip_mismatches {
            lines.push(format!(
                "MAC {}: {left_label} has IP {} vs {right_label} has IP {}",
                entry.mac, entry.left_ip, entry.right_ip
            ));
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "MAC mismatches (same IP, different MACs) between {left_label} and {right_label}:"
    ));
    if result.mac_mismatches.is_empty() {
        lines.push("None".to_string());
    } else {
        for entry in &result.mac_mismatches {
            lines.push(format!(
                "IP {}: {left_label} has MAC {} vs {right_label} has MAC {}",
                entry.ip, entry.left_mac, entry.right_mac
            ));
        }
    }
    lines.push(String::new());

    lines.push(format_summary(result, left_label, right_label));
    lines.join("\n")
}

/// Format the five summary counts alone.
pub fn format_summary(result: &ComparisonResult, left_label: &str, right_label: &str) -> String {
    [
        "Summary:".to_string(),
        format!("Matching pairs: {}", result.matching.len()),
        format!("Missing in {left_label}: {}", result.missing_in_left.len()),
        format!("Missing in {right_label}: {}", result.missing_in_right.len()),
        format!("IP mismatches: {}", result.ip_mismatches.len()),
        format!("MAC mismatches: {}", result.mac_mismatches.len()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::format_text;
    use crate::diff::compare;
    use crate::parser::parse;

    #[test]
    fn empty_sections_print_none() {
        let set = parse("host a { hardware ethernet aa:bb:cc:dd:ee:ff; fixed-address 10.0.0.1; }");
        let text = format_text(&compare(&set, &set), "a.conf", "b.conf");

        assert!(text.contains("Missing in a.conf (present in b.conf, not in a.conf):\nNone"));
        assert!(text.contains("MAC mismatches (same IP, different MACs) between a.conf and b.conf:\nNone"));
        assert!(text.contains("Matching pairs: 1"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let set = parse("host a { hardware ethernet aa:bb:cc:dd:ee:ff; fixed-address 10.0.0.1; }");
        let text = format_text(&compare(&set, &set), "left", "right");

        let missing_left = text.find("Missing in left").expect("missing-in-first section");
        let missing_right = text.find("Missing in right").expect("missing-in-second section");
        let ip_mismatch = text.find("IP mismatches").expect("ip mismatch section");
        let mac_mismatch = text.find("MAC mismatches").expect("mac mismatch section");
        let summary = text.find("Summary:").expect("summary section");

        assert!(missing_left < missing_right);
        assert!(missing_right < ip_mismatch);
        assert!(ip_mismatch < mac_mismatch);
        assert!(mac_mismatch < summary);
    }
}
