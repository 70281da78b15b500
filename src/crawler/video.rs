//! YouTube embed recognition
//!
//! An iframe counts as a video embed when its `src` starts with a
//! `youtube.com/embed/<id>` or `youtube-nocookie.com/embed/<id>` address,
//! with optional scheme and `www.`, compared case-insensitively.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMBED_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)^(?:https?://)?(?:www\.)?youtube\.com/embed/[\w-]+")
            .expect("valid youtube embed regex"),
        Regex::new(r"(?i)^(?:https?://)?(?:www\.)?youtube-nocookie\.com/embed/[\w-]+")
            .expect("valid youtube-nocookie embed regex"),
    ]
});

/// Returns true if `src` is a recognised video embed address
pub fn is_video_embed(src: &str) -> bool {
    EMBED_PATTERNS.iter().any(|pattern| pattern.is_match(src))
}

/// Converts an embed address to the canonical watch URL
///
/// The video id is the first non-empty `v` query parameter, otherwise the last
/// path segment. Returns `None` if the address cannot be parsed.
///
/// # Examples
///
/// ```
/// use site_crawler::crawler::canonical_video_url;
///
/// assert_eq!(
///     canonical_video_url("https://www.youtube.com/embed/abc123").as_deref(),
///     Some("https://www.youtube.com/watch?v=abc123")
/// );
/// assert_eq!(
///     canonical_video_url("https://youtube-nocookie.com/embed/xyz?extra=1").as_deref(),
///     Some("https://www.youtube.com/watch?v=xyz")
/// );
/// ```
pub fn canonical_video_url(embed_src: &str) -> Option<String> {
    let parsed = match Url::parse(embed_src) {
        Ok(url) => url,
        // Scheme-less embeds ("youtube.com/embed/..") are host-first
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", embed_src)).ok()?
        }
        Err(_) => return None,
    };

    let from_query = parsed
        .query_pairs()
        .find(|(key, value)| key == "v" && !value.is_empty())
        .map(|(_, value)| value.into_owned());

    let video_id = match from_query {
        Some(id) => id,
        None => parsed.path().rsplit('/').next().unwrap_or_default().to_string(),
    };

    Some(format!("https://www.youtube.com/watch?v={}", video_id))
}

/// Canonical URLs of every video embed among `frame_sources`, in order
pub fn extract_video_urls(frame_sources: &[String]) -> Vec<String> {
    frame_sources
        .iter()
        .filter(|src| is_video_embed(src))
        .filter_map(|src| canonical_video_url(src))
        .collect()
}
