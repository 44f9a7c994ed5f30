//! Console report printing.
//!
//! The final report is printed directly to stdout (and mirrored into the
//! log), so it survives `--quiet` mode.

use colored::Colorize;

use crate::processing::Report;

/// Print the detail report: one block per list, entries indented.
pub fn print_detail_report(title: &str, report: &Report) {
    let mut lines = Vec::new();
    lines.push(format!("\n{title}"));
    lines.push("=".repeat(60));

    if report.is_empty() {
        lines.push("No matching entries found in any managed prefix lists.".to_string());
    } else {
        for result in &report.results {
            lines.push(format!(
                "{} | {} | {} matching entr{}",
                result.pl.id,
                result.pl.display_name(),
                result.entries.len(),
                if result.entries.len() == 1 { "y" } else { "ies" }
            ));
            for entry in &result.entries {
                lines.push(format!(
                    "  {} | {}",
                    entry.display_cidr(),
                    entry.display_description()
                ));
            }
            lines.push("-".repeat(60));
        }
    }

    print_lines(&lines);
}

/// Print the listing report: one `id | name` line per prefix list.
pub fn print_listing_report(title: &str, listing: &[(String, String)]) {
    let mut lines = Vec::new();
    lines.push(format!("\n{title}"));
    lines.push("=".repeat(60));

    if listing.is_empty() {
        lines.push("No managed prefix lists found.".to_string());
    } else {
        for (pl_id, pl_name) in listing {
            lines.push(format!("{pl_id} | {pl_name}"));
        }
        lines.push("-".repeat(60));
    }

    print_lines(&lines);
}

/// Log each line, then print the whole block with the banner highlighted.
fn print_lines(lines: &[String]) {
    for line in lines {
        log::info!("{line}");
    }
    let mut iter = lines.iter();
    if let Some(banner) = iter.next() {
        println!("{}", banner.bold());
    }
    for line in iter {
        println!("{line}");
    }
}
