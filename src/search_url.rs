use crate::error::{Result, ScrapeError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Search pages on the listing site that carry the embedded results model
static LISTING_SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://www\.rightmove\.co\.uk/(property-to-rent|property-for-sale|new-homes-for-sale)/find\.html\?",
    )
    .expect("listing search pattern is valid")
});

/// A search-results URL.
///
/// Only well-formedness is enforced; the query itself is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrl(Url);

impl SearchUrl {
    /// Parse and validate a search URL
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| ScrapeError::InvalidUrl {
            url: input.to_string(),
            reason,
        };

        let url = Url::parse(input.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme `{}`", other))),
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Whether this looks like one of the listing site's own search pages
    pub fn is_listing_search(&self) -> bool {
        LISTING_SEARCH.is_match(self.0.as_str())
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
