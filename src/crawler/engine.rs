//! Crawl traversal engine
//!
//! This module contains the main crawl loop. Each iteration:
//! 1. Pops the front of the frontier and normalizes it
//! 2. Skips it if already visited, otherwise marks it visited
//! 3. Fetches the page (failures are logged and the loop moves on)
//! 4. Processes the page and appends its record to the sink immediately
//! 5. Resolves, normalizes and scope-filters discovered links into the frontier
//! 6. Sleeps for the politeness delay
//!
//! Everything runs on one task; there is a single fetch in flight at a time.

use crate::crawler::context::CrawlContext;
use crate::crawler::fetcher::{FetchedPage, PageFetcher};
use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::crawler::processor::Variant;
use crate::output::{CrawlSummary, RecordSink};
use crate::state::{CrawlPhase, PageOutcome};
use crate::url::normalize_url;
use crate::CrawlError;
use chrono::Utc;
use url::Url;

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    fetch_failures: usize,
    records_written: usize,
    links_enqueued: usize,
    links_skipped: usize,
}

/// Breadth-first crawler over one scoped site
pub struct Crawler<F, S> {
    context: CrawlContext,
    variant: Variant,
    fetcher: F,
    sink: S,
    frontier: Frontier,
    visited: VisitedSet,
    phase: CrawlPhase,
    counters: Counters,
}

impl<F, S> Crawler<F, S>
where
    F: PageFetcher,
    S: RecordSink,
{
    /// Creates an idle crawler with the seed queued
    ///
    /// # Arguments
    ///
    /// * `context` - Seed, scope and settings for the run
    /// * `variant` - What to extract from each page
    /// * `fetcher` - Source of page content
    /// * `sink` - Destination for per-page records
    pub fn new(context: CrawlContext, variant: Variant, fetcher: F, sink: S) -> Self {
        let frontier = Frontier::with_seed(context.start_url.clone());

        Self {
            context,
            variant,
            fetcher,
            sink,
            frontier,
            visited: VisitedSet::new(),
            phase: CrawlPhase::Idle,
            counters: Counters::default(),
        }
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn context(&self) -> &CrawlContext {
        &self.context
    }

    /// Drains the frontier and reports what was done
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - Frontier exhausted
    /// * `Err(CrawlError)` - The sink failed, or the crawler already finished
    pub async fn run(&mut self) -> Result<CrawlSummary, CrawlError> {
        let started_at = Utc::now();
        self.enter_running()?;

        tracing::info!(
            "Starting {} crawl of {} (scope: {}{})",
            self.variant,
            self.context.seed,
            self.context.scope.domain,
            self.context.scope.path_prefix
        );

        while self.step().await?.is_some() {}

        self.phase = self.phase.transition(CrawlPhase::Done)?;

        tracing::info!(
            "Crawl completed. Total pages visited: {}",
            self.visited.len()
        );

        Ok(CrawlSummary {
            seed: self.context.seed.clone(),
            variant: self.variant,
            output_path: self.context.output_path.clone(),
            pages_visited: self.visited.len(),
            fetch_failures: self.counters.fetch_failures,
            records_written: self.counters.records_written,
            links_enqueued: self.counters.links_enqueued,
            links_skipped: self.counters.links_skipped,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Processes one frontier entry
    ///
    /// Returns `Ok(None)` once the frontier is empty.
    pub async fn step(&mut self) -> Result<Option<PageOutcome>, CrawlError> {
        self.enter_running()?;

        let Some(queued) = self.frontier.pop() else {
            return Ok(None);
        };

        let url = normalize_url(&queued);
        if !self.visited.mark(&url) {
            tracing::debug!("Skipping already visited URL: {}", url);
            return Ok(Some(PageOutcome::AlreadyVisited));
        }

        tracing::info!("Fetching: {}", url);
        let outcome = match self.fetcher.fetch(&url).await {
            Ok(page) => self.handle_page(&url, &page)?,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", url, e);
                self.counters.fetch_failures += 1;
                PageOutcome::FetchFailed
            }
        };

        tracing::debug!("Finished {}: {}", url, outcome);

        let delay = self.context.settings.politeness_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(Some(outcome))
    }

    fn enter_running(&mut self) -> Result<(), CrawlError> {
        if self.phase != CrawlPhase::Running {
            self.phase = self.phase.transition(CrawlPhase::Running)?;
        }
        Ok(())
    }

    /// Writes the page's record, then feeds its links to the frontier
    fn handle_page(&mut self, url: &str, page: &FetchedPage) -> Result<PageOutcome, CrawlError> {
        tracing::debug!(
            "Fetched {} (HTTP {}, {})",
            url,
            page.status_code,
            page.content_type.as_deref().unwrap_or("no content type")
        );
        if page.final_url != page.url {
            tracing::debug!("Redirected {} -> {}", page.url, page.final_url);
        }

        let processed = self.variant.process(&page.body, url);

        let record_written = match &processed.payload {
            Some(payload) => {
                self.sink.write_record(payload)?;
                self.counters.records_written += 1;
                true
            }
            None => false,
        };

        let (links_enqueued, links_skipped) = self.enqueue_links(url, &processed.links);
        tracing::info!(
            "Found {} new links and skipped {} links on {}",
            links_enqueued,
            links_skipped,
            url
        );

        Ok(PageOutcome::Processed {
            record_written,
            links_enqueued,
            links_skipped,
        })
    }

    /// Resolves raw hrefs against `page_url` and enqueues those in scope
    ///
    /// The visited check here only saves frontier space; the check at pop
    /// time is authoritative. Hrefs that do not resolve are dropped without
    /// being counted.
    fn enqueue_links(&mut self, page_url: &str, links: &[String]) -> (usize, usize) {
        let base = match Url::parse(page_url) {
            Ok(base) => base,
            Err(e) => {
                tracing::warn!("Cannot resolve links on {}: {}", page_url, e);
                return (0, 0);
            }
        };

        let mut enqueued = 0;
        let mut skipped = 0;

        for href in links {
            let resolved = match base.join(href) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::debug!("Dropping malformed link {} on {}: {}", href, page_url, e);
                    continue;
                }
            };

            let candidate = normalize_url(resolved.as_str());
            if !self.context.scope.accepts(&resolved) || self.visited.contains(&candidate) {
                skipped += 1;
                continue;
            }

            tracing::debug!("Added to queue: {}", candidate);
            self.frontier.push(candidate);
            enqueued += 1;
        }

        self.counters.links_enqueued += enqueued;
        self.counters.links_skipped += skipped;
        (enqueued, skipped)
    }
}
