//! Command-line interface shared by both binaries

use crate::config::load_config_or_default;
use crate::crawler::{crawl, Variant};
use crate::logging::init_logging;
use crate::output::print_summary;
use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Scoped breadth-first website crawler
///
/// Visits every page on the start URL's host whose path begins with the
/// start URL's path, one request at a time.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Absolute HTTP(S) URL to start crawling from
    #[arg(value_name = "START_URL")]
    pub start_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Write DEBUG events to the log file
    #[arg(long)]
    pub debug: bool,
}

fn about(variant: Variant) -> &'static str {
    match variant {
        Variant::Text => "Crawl a site section and save the visible text of every page",
        Variant::Video => "Crawl a site section and collect embedded YouTube videos",
    }
}

/// Parses process arguments with the variant's help text
pub fn parse_args(variant: Variant) -> Cli {
    let matches = Cli::command().about(about(variant)).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Parses arguments and runs one crawl
pub async fn run(variant: Variant) -> anyhow::Result<()> {
    execute(parse_args(variant), variant).await
}

/// Runs one crawl for already-parsed arguments
///
/// Loads configuration, sets up logging, crawls, and prints the summary.
pub async fn execute(cli: Cli, variant: Variant) -> anyhow::Result<()> {
    let config =
        load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    std::fs::create_dir_all(&config.output.logs_dir).with_context(|| {
        format!(
            "Failed to create logs directory {}",
            config.output.logs_dir.display()
        )
    })?;
    init_logging(
        &config.output.logs_dir.join(variant.log_file_name()),
        cli.debug,
    )?;

    match &cli.config {
        Some(path) => tracing::info!("Configuration loaded from: {}", path.display()),
        None => tracing::info!("Using default configuration"),
    }

    let summary = match crawl(&cli.start_url, variant, &config).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).with_context(|| format!("Crawl of {} failed", cli.start_url));
        }
    };

    tracing::info!(
        "{} saved to: {}",
        variant.output_description(),
        summary.output_path.display()
    );
    print_summary(&summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_start_url_only() {
        let cli = Cli::try_parse_from(["site-crawler", "https://ex.com/blog"]).unwrap();
        assert_eq!(cli.start_url, "https://ex.com/blog");
        assert!(cli.config.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "video-crawler",
            "--debug",
            "-c",
            "crawler.toml",
            "https://ex.com/",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("crawler.toml")));
    }

    #[test]
    fn test_start_url_required() {
        assert!(Cli::try_parse_from(["site-crawler"]).is_err());
    }

    #[test]
    fn test_about_differs_per_variant() {
        assert_ne!(about(Variant::Text), about(Variant::Video));
    }
}
