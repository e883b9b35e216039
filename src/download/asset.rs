//! Asset file downloading.

use crate::config::Config;
use crate::download::report::{FailReason, Outcome};
use crate::fetch::PageClient;
use crate::fs::paths::asset_path;

/// Download one asset into the configured output directory.
///
/// The whole body is buffered in memory and written in a single operation,
/// so a file only ever appears on disk byte-complete. If the computed target
/// path already exists no request is issued at all.
pub async fn download_asset(client: &PageClient, config: &Config, url: &str) -> Outcome {
    let target = asset_path(&config.output_dir, url);

    if target.exists() {
        if config.show_skipped {
            tracing::info!("File already exists, skipping: {}", target.display());
        }
        return Outcome::Skipped;
    }

    let response = match client.get_asset(url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", url, e);
            return Outcome::Failed(FailReason::Network(e.to_string()));
        }
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        tracing::warn!("Download failed for {}: HTTP {}", url, status);
        return Outcome::Failed(FailReason::Status(status.as_u16()));
    }

    // Buffer the full body; a mid-transfer error here means no file is ever
    // created.
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read body from {}: {}", url, e);
            return Outcome::Failed(FailReason::Network(e.to_string()));
        }
    };

    if body.is_empty() {
        tracing::warn!("Downloaded 0 bytes for {}; not creating file", url);
        return Outcome::Failed(FailReason::EmptyBody);
    }

    let bytes = body.len() as u64;
    if let Err(e) = tokio::fs::write(&target, &body).await {
        tracing::warn!("Failed to write {} for {}: {}", target.display(), url, e);
        return Outcome::Failed(FailReason::Write(e.to_string()));
    }

    tracing::info!(
        "Successfully downloaded {} bytes: {} -> {}",
        bytes,
        url,
        target.display()
    );
    Outcome::Downloaded { bytes }
}
