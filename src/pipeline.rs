//! Sequential fetch, extract, dedupe, download pipeline.

use crate::config::Config;
use crate::download::{download_asset, FailReason, Outcome, Report};
use crate::error::Result;
use crate::extract::{dedup_preserving_order, extract_asset_links, is_valid_url};
use crate::fetch::PageClient;
use crate::fs::{append_page, ensure_dir};

/// Run the whole pipeline once and return the per-item report.
///
/// One asset is processed at a time, in document order. A failed seed fetch
/// or a failed download never aborts the run; only being unable to build the
/// HTTP client does.
pub async fn run(config: &Config) -> Result<Report> {
    let client = PageClient::new(config.request_timeout())?;

    let mut links = Vec::new();
    for seed in &config.seed_urls {
        let page = match client.fetch_page(seed).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Skipping seed page: {}", e);
                continue;
            }
        };

        if let Err(e) = append_page(&config.archive_path, &page, config.archive_max_bytes) {
            tracing::warn!("Failed to archive {}: {}", seed, e);
        }

        links.extend(extract_asset_links(&page));
    }

    let links = dedup_preserving_order(links);
    tracing::info!("Found {} unique asset links", links.len());

    if let Err(e) = ensure_dir(&config.output_dir) {
        // Not fatal; each affected write fails and is reported per item.
        tracing::warn!(
            "Failed to create {}: {}",
            config.output_dir.display(),
            e
        );
    }

    let mut report = Report::default();
    for url in links {
        let outcome = if is_valid_url(&url) {
            download_asset(&client, config, &url).await
        } else {
            tracing::warn!("Ignoring malformed URL: {}", url);
            Outcome::Failed(FailReason::InvalidUrl)
        };
        report.record(url, outcome);
    }

    Ok(report)
}
