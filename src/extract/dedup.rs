//! Order-preserving deduplication of extracted links.

use std::collections::HashSet;

/// Collapse a URL list to first occurrences, preserving relative order.
///
/// Equality is exact string equality; `https://X/a.pdf` and `https://x/a.pdf`
/// are distinct entries.
pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = urls;
    urls.retain(|url| seen.insert(url.clone()));
    urls
}
