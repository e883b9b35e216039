//! Configuration module for the asset-harvester.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::Config;
pub use validation::validate_config;
