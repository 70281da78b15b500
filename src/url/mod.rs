//! URL handling module
//!
//! This module provides fragment-stripping normalization, authority extraction,
//! the crawl scope filter, and output file naming.

mod domain;
mod filename;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::extract_domain;
pub use filename::output_file_name;
pub use normalize::normalize_url;
pub use scope::ScopeDescriptor;

use crate::{UrlError, UrlResult};
use ::url::Url;

/// Parses a seed URL, requiring an HTTP(S) scheme and a host
///
/// Discovered links are never passed through this check; only the seed has to
/// be fetchable for a run to start.
pub fn parse_seed(seed: &str) -> UrlResult<Url> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(format!("{}: {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_https() {
        let url = parse_seed("https://ex.com/blog").unwrap();
        assert_eq!(url.path(), "/blog");
    }

    #[test]
    fn test_parse_seed_http() {
        assert!(parse_seed("http://127.0.0.1:8080/docs").is_ok());
    }

    #[test]
    fn test_parse_seed_invalid_scheme() {
        let result = parse_seed("ftp://ex.com/files");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_parse_seed_malformed() {
        let result = parse_seed("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }
}
