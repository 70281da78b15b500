//! Page processing variants
//!
//! Both variants share link discovery (every anchor target on the page) and
//! differ only in the payload they produce for the output file.

use crate::crawler::parser::parse_html;
use crate::crawler::video::extract_video_urls;
use std::fmt;

/// Width of the `=` rule closing each text record
const RECORD_DELIMITER_WIDTH: usize = 80;

/// Which extraction a crawl performs, fixed when the engine is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Visible text of every page
    Text,

    /// Canonical URLs of embedded YouTube videos
    Video,
}

/// Result of processing one fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPage {
    /// Record to append to the output sink, if the page produced one
    pub payload: Option<String>,

    /// Raw anchor targets, unresolved
    pub links: Vec<String>,
}

impl Variant {
    /// Produces the output payload and discovered links for a page
    ///
    /// # Arguments
    ///
    /// * `content` - The page body
    /// * `page_url` - Normalized URL the page was fetched from
    pub fn process(&self, content: &str, page_url: &str) -> ProcessedPage {
        let parsed = parse_html(content);

        let payload = match self {
            Self::Text => Some(format_text_record(page_url, &parsed.text)),
            Self::Video => {
                let videos = extract_video_urls(&parsed.frames);
                if videos.is_empty() {
                    None
                } else {
                    tracing::info!("Found {} YouTube videos on {}", videos.len(), page_url);
                    Some(format_video_record(page_url, &videos))
                }
            }
        };

        ProcessedPage {
            payload,
            links: parsed.links,
        }
    }

    /// Suffix appended to the output file name
    pub fn output_suffix(&self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Video => "_youtube_videos",
        }
    }

    /// File name of this variant's log inside the logs directory
    pub fn log_file_name(&self) -> &'static str {
        match self {
            Self::Text => "crawler.log",
            Self::Video => "youtube_crawler.log",
        }
    }

    /// Noun for what the output file contains, used in the final report
    pub fn output_description(&self) -> &'static str {
        match self {
            Self::Text => "Crawled content",
            Self::Video => "YouTube videos",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats one text-extraction record
pub fn format_text_record(url: &str, text: &str) -> String {
    format!(
        "Content from {}:\n\n{}\n\n{}\n\n",
        url,
        text,
        "=".repeat(RECORD_DELIMITER_WIDTH)
    )
}

/// Formats one video-extraction record
pub fn format_video_record(url: &str, videos: &[String]) -> String {
    let mut record = format!("YouTube videos found on {}:\n", url);
    for video in videos {
        record.push_str(video);
        record.push('\n');
    }
    record.push('\n');
    record
}
