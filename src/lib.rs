//! Asset Harvester - scrape a page for asset links and download them.
//!
//! This library fetches seed HTML pages, extracts asset links (PDFs, images,
//! archives) from `href` attributes, and downloads each unique link into a
//! local directory. Files already present on disk are skipped, so repeated
//! runs only fetch what is missing.
//!
//! # Example
//!
//! ```no_run
//! use asset_harvester::{pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.seed_urls = vec!["https://example.com/downloads".to_string()];
//!
//!     let report = pipeline::run(&config).await?;
//!     println!("{} downloaded, {} skipped", report.downloaded(), report.skipped());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fs;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use config::Config;
pub use download::{FailReason, Outcome, Report};
pub use error::{Error, Result};
pub use fetch::PageClient;
