//! End-of-run crawl summary

use crate::crawler::Variant;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Counters and timestamps for one finished crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Seed URL the crawl started from
    pub seed: String,

    /// Extraction variant used
    pub variant: Variant,

    /// Where records were written
    pub output_path: PathBuf,

    /// Distinct normalized URLs taken from the frontier
    pub pages_visited: usize,

    /// Visited URLs whose fetch failed
    pub fetch_failures: usize,

    /// Records appended to the output
    pub records_written: usize,

    /// Links appended to the frontier
    pub links_enqueued: usize,

    /// Resolved links rejected as out of scope or already visited
    pub links_skipped: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlSummary {
    /// Visited pages that were fetched successfully
    pub fn pages_processed(&self) -> usize {
        self.pages_visited.saturating_sub(self.fetch_failures)
    }

    /// Wall-clock length of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.pages_visited == 0 {
            return 0.0;
        }
        (self.pages_processed() as f64 / self.pages_visited as f64) * 100.0
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!();
    println!("=== Crawl Summary ===\n");
    println!("  Seed: {}", summary.seed);
    println!("  Mode: {}", summary.variant);
    println!(
        "  Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Duration: {} seconds", summary.duration_seconds());
    println!();
    println!("  Pages visited: {}", summary.pages_visited);
    println!("  Fetch failures: {}", summary.fetch_failures);
    println!("  Records written: {}", summary.records_written);
    println!(
        "  Links enqueued / skipped: {} / {}",
        summary.links_enqueued, summary.links_skipped
    );
    println!(
        "  Success Rate: {:.1}% ({} / {} pages)",
        summary.success_rate(),
        summary.pages_processed(),
        summary.pages_visited
    );
    println!("  Output: {}", summary.output_path.display());
}
