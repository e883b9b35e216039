//! Fetch module.
//!
//! Provides the HTTP client used for seed pages and asset downloads.

pub mod client;

pub use client::PageClient;
