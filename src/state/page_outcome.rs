//! Outcome of one frontier pop

use std::fmt;

/// What the engine did with a URL taken from the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    /// Normalized URL was already in the visited set; nothing fetched
    AlreadyVisited,

    /// Fetch failed; the URL stays visited and is not retried this run
    FetchFailed,

    /// Page was fetched, processed and its links considered
    Processed {
        /// Whether a record was appended to the output sink
        record_written: bool,
        /// Links appended to the frontier
        links_enqueued: usize,
        /// Resolved links rejected by scope or already visited
        links_skipped: usize,
    },
}

impl PageOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyVisited => "already_visited",
            Self::FetchFailed => "fetch_failed",
            Self::Processed { .. } => "processed",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
