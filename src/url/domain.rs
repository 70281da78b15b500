use ::url::Url;

/// Extracts the authority used for same-origin comparison
///
/// This is the host plus the port when one is given explicitly. Two URLs on
/// the same host but different ports are different origins. No `www.`
/// folding happens here.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_crawler::url::extract_domain;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}
