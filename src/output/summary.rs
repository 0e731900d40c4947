//! Run summary for the end of a deduplication run

use crate::dedup::DedupStats;

/// Formats the run summary
pub fn format_summary(stats: &DedupStats, kept: usize) -> String {
    let mut output = String::new();

    output.push_str("=== UDdup Summary ===\n");
    output.push_str(&format!("  URLs processed:   {}\n", stats.urls_processed()));
    output.push_str(&format!("  Blank lines:      {}\n", stats.blank));
    output.push_str(&format!("  Unique URLs kept: {}\n", kept));
    output.push_str(&format!("  Static assets:    {}\n", stats.ignored));
    output.push_str(&format!("  Redundant:        {}\n", stats.redundant));
    output.push_str(&format!("  Dropped in total: {}\n", stats.dropped()));
    output.push_str(&format!("  Replaced:         {}\n", stats.replaced));
    output.push_str(&format!("  Query variants:   {}\n", stats.variants_added));

    output
}

/// Prints the run summary to stderr so stdout only carries results
pub fn print_summary(stats: &DedupStats, kept: usize) {
    eprint!("{}", format_summary(stats, kept));
}
