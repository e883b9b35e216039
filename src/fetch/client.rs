//! HTTP client for seed pages and asset transfers.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::{Error, Result};

/// HTTP client shared by the seed fetch and every asset download.
///
/// One timeout policy covers both request kinds; a seed page that hangs is
/// treated no differently from an asset that hangs.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch a seed page and return its full body as text.
    ///
    /// Non-2xx statuses are errors; the caller decides whether that aborts
    /// the run or only skips the page.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::info!("Scraping {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                message: format!("HTTP status {}", response.status()),
            });
        }

        let body = response.text().await?;
        Ok(body)
    }

    /// Issue a GET for an asset and return the raw response.
    ///
    /// Status handling is left to the downloader, which maps it into a
    /// per-item outcome rather than an error.
    pub async fn get_asset(&self, url: &str) -> std::result::Result<Response, reqwest::Error> {
        self.client.get(url).send().await
    }
}
