//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
///
/// Every knob the pipeline needs lives here; nothing is read from globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed pages to scrape for asset links.
    #[serde(default)]
    pub seed_urls: Vec<String>,

    /// File the raw body of every fetched page is appended to.
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,

    /// Directory downloaded assets are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Timeout applied to every outbound request, seed fetches included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Archive size cap; the archive is rotated before an append that would
    /// push it past this.
    #[serde(default = "default_archive_max_bytes")]
    pub archive_max_bytes: u64,

    /// Whether to log skipped (already present) assets.
    #[serde(default = "default_true")]
    pub show_skipped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_urls: Vec::new(),
            archive_path: default_archive_path(),
            output_dir: default_output_dir(),
            request_timeout_secs: default_request_timeout(),
            archive_max_bytes: default_archive_max_bytes(),
            show_skipped: true,
        }
    }
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("pages.html")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Assets")
}

fn default_request_timeout() -> u64 {
    180
}

fn default_archive_max_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.seed_urls.is_empty());
        assert_eq!(config.archive_path, PathBuf::from("pages.html"));
        assert_eq!(config.output_dir, PathBuf::from("Assets"));
        assert_eq!(config.request_timeout_secs, 180);
        assert_eq!(config.archive_max_bytes, 10 * 1024 * 1024);
        assert!(config.show_skipped);
    }

    #[test]
    fn test_parse_full() {
        let toml = r#"
            seed_urls = ["https://example.com/downloads"]
            archive_path = "archive/pages.html"
            output_dir = "downloads"
            request_timeout_secs = 30
            archive_max_bytes = 1024
            show_skipped = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.seed_urls.len(), 1);
        assert_eq!(config.output_dir, PathBuf::from("downloads"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.show_skipped);
    }
}
