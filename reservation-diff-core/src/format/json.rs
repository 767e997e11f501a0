use crate::diff::ComparisonResult;

/// Format a comparison result as JSON.
pub fn format_json(result: &ComparisonResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}
