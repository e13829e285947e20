//! Configuration validation functionality.
//!
//! Rejects values the search could never work with: out-of-range timeouts and
//! hours, non-HTTP endpoints, and empty description entries.

use anyhow::Result;

use super::Config;
use crate::constants::*;

/// Validate every configured field, reporting the first problem found.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(timeout) = config.request_timeout
        && !(MINIMUM_REQUEST_TIMEOUT..=MAXIMUM_REQUEST_TIMEOUT).contains(&timeout)
    {
        anyhow::bail!(
            "request_timeout ({} s) must be between {} and {} seconds",
            timeout,
            MINIMUM_REQUEST_TIMEOUT,
            MAXIMUM_REQUEST_TIMEOUT
        );
    }

    if let Some(hour) = config.fallback_hour
        && hour > 23
    {
        anyhow::bail!("fallback_hour ({}) must be between 0 and 23", hour);
    }

    for (field, value) in [
        ("geocode_url", &config.geocode_url),
        ("astronomy_url", &config.astronomy_url),
        ("skymap_url", &config.skymap_url),
    ] {
        if let Some(url) = value {
            validate_url(field, url)?;
        }
    }

    for (name, text) in &config.descriptions {
        if name.trim().is_empty() {
            anyhow::bail!("descriptions: object names cannot be empty");
        }
        if text.trim().is_empty() {
            anyhow::bail!("descriptions: entry for '{}' has no text", name);
        }
    }

    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| anyhow::anyhow!("{} ('{}') is not a valid URL: {}", field, url, e))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!(
            "{} ('{}') must use http or https (got '{}')",
            field,
            url,
            parsed.scheme()
        );
    }

    Ok(())
}
