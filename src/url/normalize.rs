/// Normalizes a URL for deduplication
///
/// Only the fragment (everything from the first `#`) is removed. Query
/// strings, trailing slashes, and scheme/host casing are left exactly as
/// given, so two URLs that differ only in their query are distinct pages.
///
/// # Examples
///
/// ```
/// use site_crawler::url::normalize_url;
///
/// assert_eq!(normalize_url("https://a.com/p#x"), "https://a.com/p");
/// assert_eq!(normalize_url("https://a.com/p?q=1"), "https://a.com/p?q=1");
/// ```
pub fn normalize_url(url: &str) -> String {
    match url.split_once('#') {
        Some((base, _fragment)) => base.to_string(),
        None => url.to_string(),
    }
}
