use crate::url::extract_domain;
use regex::Regex;
use std::sync::LazyLock;
use ::url::Url;

static UNSAFE_PATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-. ]").expect("valid path sanitizer regex"));

/// Derives the output file name for a crawl from its seed
///
/// The name is `<authority>_<path><suffix>.txt`, where the path has its
/// surrounding slashes trimmed and every character other than word
/// characters, `-`, `.` and space replaced by `_`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_crawler::url::output_file_name;
///
/// let seed = Url::parse("https://ex.com/docs/guide/").unwrap();
/// assert_eq!(output_file_name(&seed, ""), "ex.com_docs_guide.txt");
/// assert_eq!(
///     output_file_name(&seed, "_youtube_videos"),
///     "ex.com_docs_guide_youtube_videos.txt"
/// );
/// ```
pub fn output_file_name(seed: &Url, suffix: &str) -> String {
    let authority = extract_domain(seed).unwrap_or_default();
    let path = seed.path().trim_matches('/');
    let sanitized = UNSAFE_PATH_CHARS.replace_all(path, "_");
    format!("{}_{}{}.txt", authority, sanitized, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(seed: &str, suffix: &str) -> String {
        output_file_name(&Url::parse(seed).unwrap(), suffix)
    }

    #[test]
    fn test_simple_path() {
        assert_eq!(name("https://ex.com/blog", ""), "ex.com_blog.txt");
    }

    #[test]
    fn test_root_path() {
        assert_eq!(name("https://ex.com/", ""), "ex.com_.txt");
        assert_eq!(name("https://ex.com", ""), "ex.com_.txt");
    }

    #[test]
    fn test_nested_path_slashes_replaced() {
        assert_eq!(name("https://ex.com/a/b/c/", ""), "ex.com_a_b_c.txt");
    }

    #[test]
    fn test_allowed_characters_kept() {
        assert_eq!(name("https://ex.com/my-page_v1.2", ""), "ex.com_my-page_v1.2.txt");
    }

    #[test]
    fn test_other_characters_replaced() {
        assert_eq!(name("https://ex.com/a~b+c", ""), "ex.com_a_b_c.txt");
    }

    #[test]
    fn test_query_not_included() {
        assert_eq!(name("https://ex.com/blog?page=2", ""), "ex.com_blog.txt");
    }

    #[test]
    fn test_suffix_distinguishes_variants() {
        assert_ne!(
            name("https://ex.com/blog", ""),
            name("https://ex.com/blog", "_youtube_videos")
        );
    }

    #[test]
    fn test_port_kept_in_authority() {
        assert_eq!(name("http://127.0.0.1:8080/docs", ""), "127.0.0.1:8080_docs.txt");
    }
}
