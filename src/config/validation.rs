//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the entire configuration.
///
/// Runs after CLI arguments have been merged, before the pipeline starts.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_seed_urls(&config.seed_urls)?;
    validate_timeout(config.request_timeout_secs)?;

    Ok(())
}

/// Validate the seed URL list.
pub fn validate_seed_urls<S: AsRef<str>, I: IntoIterator<Item = S>>(seed_urls: I) -> Result<()> {
    let seed_urls: Vec<_> = seed_urls.into_iter().collect();

    if seed_urls.is_empty() {
        return Err(Error::MissingConfig(
            "seed_urls (at least one seed page URL required)".to_string(),
        ));
    }

    for seed in seed_urls {
        let seed = seed.as_ref();

        let parsed = Url::parse(seed).map_err(|e| Error::ConfigValidation {
            field: "seed_urls".to_string(),
            message: format!("'{}' is not a valid URL: {}", seed, e),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::ConfigValidation {
                field: "seed_urls".to_string(),
                message: format!(
                    "'{}' uses unsupported scheme '{}'. Only http and https are supported.",
                    seed,
                    parsed.scheme()
                ),
            });
        }
    }

    Ok(())
}

/// Validate the request timeout.
pub fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "request_timeout_secs".to_string(),
            message: "Timeout must be greater than zero".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_seed_urls() {
        assert!(validate_seed_urls(&["https://example.com/page"]).is_ok());
        assert!(validate_seed_urls(&["http://example.com"]).is_ok());
    }

    #[test]
    fn test_empty_seed_urls() {
        assert!(validate_seed_urls(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_invalid_seed_url() {
        assert!(validate_seed_urls(&["not a url"]).is_err());
        assert!(validate_seed_urls(&["ftp://example.com/file"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(validate_timeout(0).is_err());
        assert!(validate_timeout(180).is_ok());
    }
}
