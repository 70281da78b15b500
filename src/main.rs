//! Site-Crawler text-extraction entry point
//!
//! Saves the visible text of every in-scope page to
//! `crawler-data/<host>_<path>.txt`.

use site_crawler::cli;
use site_crawler::Variant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cli::run(Variant::Text).await
}
