//! Tracing subscriber setup
//!
//! Every run logs to a per-variant file in the logs directory and mirrors
//! INFO and above to the console.

use crate::CrawlError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Filter directives for the requested verbosity
pub fn filter_directives(debug: bool) -> &'static str {
    if debug {
        "site_crawler=debug,info"
    } else {
        "site_crawler=info,warn"
    }
}

/// Installs the global subscriber
///
/// The log file is opened for appending, so earlier runs are kept.
///
/// # Arguments
///
/// * `log_path` - File receiving every event that passes the filter
/// * `debug` - Include DEBUG events from this crate
///
/// # Returns
///
/// * `Ok(())` - Subscriber installed
/// * `Err(CrawlError::Logging)` - Log file not writable, or a subscriber was
///   already installed
pub fn init_logging(log_path: &Path, debug: bool) -> crate::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| {
            CrawlError::Logging(format!("cannot open {}: {}", log_path.display(), e))
        })?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directives(debug)))
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| CrawlError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(false), "site_crawler=info,warn");
        assert_eq!(filter_directives(true), "site_crawler=debug,info");
    }

    #[test]
    fn test_init_logging_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("crawler.log");

        init_logging(&log_path, true).unwrap();
        tracing::info!("Fetching: https://ex.com/blog");
        tracing::debug!("Added to queue: https://ex.com/blog/post1");

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("Fetching: https://ex.com/blog"));
        assert!(contents.contains("Added to queue: https://ex.com/blog/post1"));
        assert!(!contents.contains("\u{1b}["));

        // A second subscriber cannot be installed
        assert!(matches!(
            init_logging(&log_path, false),
            Err(CrawlError::Logging(_))
        ));
    }

    #[test]
    fn test_init_logging_missing_directory() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("missing").join("crawler.log");

        assert!(matches!(
            init_logging(&log_path, false),
            Err(CrawlError::Logging(_))
        ));
    }
}
