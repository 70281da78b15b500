//! Per-run context handed to the traversal engine

use crate::config::CrawlerConfig;
use crate::url::{normalize_url, parse_seed, ScopeDescriptor};
use crate::UrlError;
use std::path::PathBuf;

/// Everything fixed for the lifetime of one crawl
#[derive(Debug, Clone)]
pub struct CrawlContext {
    /// Seed URL as given by the user
    pub seed: String,

    /// Seed as serialized by the URL parser, without fragment
    ///
    /// Resolved links come out in this form (lowercase host, default port
    /// dropped), so the seed must enter the frontier the same way.
    pub start_url: String,

    /// Domain and path prefix derived from the seed
    pub scope: ScopeDescriptor,

    /// Delay, timeout and retry settings
    pub settings: CrawlerConfig,

    /// Where the output sink writes
    pub output_path: PathBuf,
}

impl CrawlContext {
    /// Builds the context, validating the seed
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlContext)` - Seed is a fetchable HTTP(S) URL with a host
    /// * `Err(UrlError)` - Seed is malformed
    pub fn new(
        seed: &str,
        settings: CrawlerConfig,
        output_path: PathBuf,
    ) -> Result<Self, UrlError> {
        let seed_url = parse_seed(seed)?;
        let scope = ScopeDescriptor::from_seed(&seed_url)?;

        Ok(Self {
            seed: seed.to_string(),
            start_url: normalize_url(seed_url.as_str()),
            scope,
            settings,
            output_path,
        })
    }
}
