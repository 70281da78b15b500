//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: Lifecycle of a single crawl run (idle, running, done)
//! - `PageOutcome`: What happened to one URL popped from the frontier

mod crawl_phase;
mod page_outcome;

// Re-export main types
pub use crawl_phase::CrawlPhase;
pub use page_outcome::PageOutcome;
