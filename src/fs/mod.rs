//! Filesystem module.
//!
//! Provides:
//! - Deterministic URL-to-filename mapping
//! - Path and directory management
//! - The capped page archive

pub mod archive;
pub mod naming;
pub mod paths;

pub use archive::append_page;
pub use naming::filename_for_url;
pub use paths::{asset_path, ensure_dir};
