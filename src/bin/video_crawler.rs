//! Site-Crawler video-extraction entry point
//!
//! Collects the YouTube videos embedded in every in-scope page into
//! `crawler-data/<host>_<path>_youtube_videos.txt`.

use site_crawler::cli;
use site_crawler::Variant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cli::run(Variant::Video).await
}
