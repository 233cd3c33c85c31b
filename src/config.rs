use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the page scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// JavaScript assignment target that precedes the embedded JSON literal
    #[serde(default = "default_marker")]
    pub marker: String,

    /// User-Agent sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language sent with the request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_err)?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never produce a successful scrape
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(ScrapeError::Config("marker must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default marker, as used by the listing site's search pages
fn default_marker() -> String {
    "window.jsonModel".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/131.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "en-GB,en;q=0.9".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ScraperConfig::from_json(r#"{"marker": "window.PAGE_MODEL"}"#).unwrap();
        assert_eq!(config.marker, "window.PAGE_MODEL");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_empty_object_equals_default() {
        let config = ScraperConfig::from_json("{}").unwrap();
        assert_eq!(config, ScraperConfig::default());
    }

    #[test]
    fn test_rejects_blank_marker_and_zero_timeout() {
        assert!(matches!(
            ScraperConfig::from_json(r#"{"marker": "  "}"#),
            Err(ScrapeError::Config(_))
        ));
        assert!(matches!(
            ScraperConfig::from_json(r#"{"timeout_secs": 0}"#),
            Err(ScrapeError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            ScraperConfig::from_json("{marker:"),
            Err(ScrapeError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScraperConfig::from_file("/nonexistent/listing-dump.json").unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }));
    }
}
