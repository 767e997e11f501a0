use anyhow::{Context, Result};

use dhcpd_sync::report::{render_summary, render_text};
use reservation_diff_core::{compare, format_json, parse_file};

use crate::cli::{CompareArgs, OutputFormat};

pub fn run_compare(args: CompareArgs) -> Result<()> {
    let left = parse_file(&args.file1)
        .with_context(|| format!("failed to read {}", args.file1.display()))?;
    let right = parse_file(&args.file2)
        .with_context(|| format!("failed to read {}", args.file2.display()))?;

    let result = compare(&left, &right);
    let left_label = args.file1.display().to_string();
    let right_label = args.file2.display().to_string();

    if args.summary {
        println!("{}", render_summary(&result, &left_label, &right_label));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&result, &left_label, &right_label)),
        OutputFormat::Json => println!("{}", format_json(&result)),
    }

    Ok(())
}
