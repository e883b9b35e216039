//! Download module.
//!
//! This module provides:
//! - Idempotent single-asset downloading
//! - Typed per-item outcomes and the run report

pub mod asset;
pub mod report;

pub use asset::download_asset;
pub use report::{FailReason, Outcome, Report};
