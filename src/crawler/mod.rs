//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with retry logic
//! - HTML parsing and video embed recognition
//! - Per-variant page processing
//! - The breadth-first traversal engine

mod context;
mod engine;
mod fetcher;
mod frontier;
mod parser;
mod processor;
mod video;

pub use context::CrawlContext;
pub use engine::Crawler;
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher, RetryPolicy};
pub use frontier::{Frontier, VisitedSet};
pub use parser::{parse_html, ParsedPage};
pub use processor::{format_text_record, format_video_record, ProcessedPage, Variant};
pub use video::{canonical_video_url, extract_video_urls, is_video_embed};

use crate::config::Config;
use crate::output::{CrawlSummary, FileSink};
use crate::url::{output_file_name, parse_seed};
use crate::CrawlError;

/// Runs a complete crawl
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the seed and derive the scope
/// 2. Create the data directory and truncate the output file
/// 3. Build the HTTP client
/// 4. Traverse the site until the frontier is empty
///
/// The output file is opened before the first fetch, so an unwritable
/// destination fails the run without touching the network.
///
/// # Arguments
///
/// * `seed` - Absolute HTTP(S) URL to start from
/// * `variant` - What to extract from each page
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(CrawlError)` - Seed, output or client setup failed, or the output
///   could not be written mid-crawl
pub async fn crawl(
    seed: &str,
    variant: Variant,
    config: &Config,
) -> Result<CrawlSummary, CrawlError> {
    let seed_url = parse_seed(seed)?;

    std::fs::create_dir_all(&config.output.data_dir)?;
    let output_path = config
        .output
        .data_dir
        .join(output_file_name(&seed_url, variant.output_suffix()));
    let sink = FileSink::create(&output_path)?;

    let fetcher = HttpFetcher::from_config(&config.crawler, &config.user_agent)?;
    let context = CrawlContext::new(seed, config.crawler.clone(), output_path)?;

    let mut crawler = Crawler::new(context, variant, fetcher, sink);
    crawler.run().await
}
