//! Link extraction module.
//!
//! Provides:
//! - `href` pattern matching against an extension allow-list
//! - Order-preserving deduplication
//! - URL well-formedness checks

pub mod dedup;
pub mod links;

pub use dedup::dedup_preserving_order;
pub use links::{extract_asset_links, is_valid_url};
