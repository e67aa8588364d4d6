//! Run summary output

use anyhow::Result;
use colored::*;
use std::path::Path;
use varname_core::SectionSummary;

/// Print the per-section summary as a colored table
pub fn print_human(input: &Path, output: &Path, summaries: &[SectionSummary]) {
    println!("{}", format!("Variable tracker: {}", input.display()).bold());
    println!();

    println!(
        "{:<8} {:<6} {:>8} {:>8} {:>8}",
        "Sheet".bold().underline(),
        "Tag".bold().underline(),
        "Rows".bold().underline(),
        "Named".bold().underline(),
        "Padding".bold().underline()
    );
    for summary in summaries {
        println!(
            "{:<8} {:<6} {:>8} {:>8} {:>8}",
            summary.sheet_name.cyan(),
            summary.tag,
            summary.records,
            summary.named.to_string().yellow(),
            summary.padding.to_string().bright_black()
        );
    }
    println!();

    let named: usize = summaries.iter().map(|s| s.named).sum();
    println!(
        "{} {} variables written to {}",
        "✓".green().bold(),
        named,
        output.display().to_string().bold()
    );
}

/// Print the summary in JSON format
pub fn print_json(input: &Path, output: &Path, summaries: &[SectionSummary]) -> Result<()> {
    let document = serde_json::json!({
        "input": input.display().to_string(),
        "output": output.display().to_string(),
        "sections": summaries,
        "total": {
            "records": summaries.iter().map(|s| s.records).sum::<usize>(),
            "named": summaries.iter().map(|s| s.named).sum::<usize>(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
