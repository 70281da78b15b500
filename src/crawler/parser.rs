//! HTML parser for extracting text, links and embedded frames
//!
//! Extraction is deliberately raw: hrefs and srcs are returned exactly as
//! written so the engine can resolve, normalize and scope them in one place.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("iframe[src]").expect("valid iframe selector"));

/// Elements whose text never counts as visible content
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Visible text, one trimmed text node per line
    pub text: String,

    /// Raw `href` of every anchor, in document order
    pub links: Vec<String>,

    /// Raw `src` of every iframe, in document order
    pub frames: Vec<String>,
}

/// Parses HTML content and extracts text, anchor targets and frame sources
///
/// # Example
///
/// ```
/// use site_crawler::crawler::parse_html;
///
/// let html = r#"<html><body><h1>Hi</h1><p>there <a href="/next">next</a></p></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.text, "Hi\nthere\nnext");
/// assert_eq!(parsed.links, vec!["/next".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: extract_text(&document),
        links: extract_anchor_targets(&document),
        frames: extract_frame_sources(&document),
    }
}

/// Extracts the visible text of a document
///
/// Every text node is trimmed; empty ones are dropped and the rest joined with
/// newlines, so block structure survives as line breaks.
pub fn extract_text(document: &Html) -> String {
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ElementRef::wrap(ancestor)
                .map(|el| NON_VISIBLE_ELEMENTS.contains(&el.value().name()))
                .unwrap_or(false)
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}

/// Extracts every anchor `href` as written
pub fn extract_anchor_targets(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Extracts every iframe `src` as written
pub fn extract_frame_sources(document: &Html) -> Vec<String> {
    document
        .select(&IFRAME_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .map(str::to_string)
        .collect()
}
