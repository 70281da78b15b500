//! Output module for crawl records and run reporting
//!
//! This module handles:
//! - Appending per-page records to the run's output file
//! - Summarising a finished crawl

mod file_sink;
pub mod stats;
mod traits;

pub use file_sink::FileSink;
pub use stats::{print_summary, CrawlSummary};
pub use traits::RecordSink;
