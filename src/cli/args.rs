//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Asset harvester CLI.
#[derive(Parser, Debug)]
#[command(
    name = "asset-harvester",
    version,
    about = "Scrape a page for asset links and download them",
    long_about = "Fetches one or more seed HTML pages, extracts asset links \
                  (PDFs, images, archives) from href attributes, and downloads \
                  each one into a local directory.\n\n\
                  Files already present on disk are skipped, so repeated runs \
                  only fetch what is missing."
)]
pub struct Args {
    /// Seed page URL(s) to scrape.
    /// Can be given multiple times.
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Directory downloaded assets are written into.
    #[arg(short = 'd', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// File fetched page bodies are appended to.
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Per-request timeout in seconds (applies to seed fetches too).
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide skipped (already present) assets in the log.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if !self.urls.is_empty() {
            config.seed_urls = self.urls;
        }

        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }

        if let Some(archive) = self.archive {
            config.archive_path = archive;
        }

        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }

        if self.quiet {
            config.show_skipped = false;
        }
    }
}
