use colored::Colorize;
use reservation_diff_core::{format_summary, format_text, ComparisonResult};

/// Render a comparison for terminal output.
///
/// Wraps the plain-text report with color: entries only in the second file
/// green, entries only in the first red, mismatches yellow, summary cyan.
pub fn render_text(result: &ComparisonResult, left_label: &str, right_label: &str) -> String {
    let raw = format_text(result, left_label, right_label);
    let mut section = 0usize;
    let mut out = Vec::new();

    for line in raw.lines() {
        if is_section_header(line) {
            section += 1;
            out.push(line.bold().to_string());
            continue;
        }

        let colored = if line.is_empty() || line == "None" {
            line.to_string()
        } else {
            match section {
                1 => line.green().to_string(),
                2 => line.red().to_string(),
                3 | 4 => line.yellow().to_string(),
                _ => line.cyan().to_string(),
            }
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render the summary counts for terminal output.
pub fn render_summary(result: &ComparisonResult, left_label: &str, right_label: &str) -> String {
    format_summary(result, left_label, right_label)
        .cyan()
        .to_string()
}

fn is_section_header(line: &str) -> bool {
    if line == "Summary:" {
        return true;
    }
    // Summary count lines also start with "Missing in"; only the section
    // headers end with a colon.
    line.ends_with(':')
        && (line.starts_with("Missing in ")
            || line.starts_with("IP mismatches ")
            || line.starts_with("MAC mismatches "))
}
