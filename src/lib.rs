pub mod config;
pub mod error;
pub mod fetchers;
pub mod output;
pub mod parsers;
pub mod results;
pub mod search_url;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ErrorKind, ScrapeError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use output::persist;
pub use results::{ListingPayload, RawPage, ScrapedPage};
pub use search_url::SearchUrl;

use std::path::Path;

/// Scrapes the JSON model embedded in one search-results page
pub struct PageScraper {
    url: SearchUrl,
    config: ScraperConfig,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl PageScraper {
    /// Create a scraper for the given search URL with default settings
    pub fn new(url: &str) -> error::Result<Self> {
        let url = SearchUrl::parse(url)?;
        if !url.is_listing_search() {
            ::log::warn!("{} does not look like a listing search page", url);
        }

        Ok(Self {
            url,
            config: ScraperConfig::default(),
            fetcher: None,
        })
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> error::Result<Self> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> error::Result<Self> {
        let config = ScraperConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the marker that precedes the embedded JSON
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.marker = marker.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Fetch pages through `fetcher` instead of the built-in HTTP client
    pub fn with_fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Point the scraper at a different search URL
    pub fn with_url(mut self, url: &str) -> error::Result<Self> {
        self.url = SearchUrl::parse(url)?;
        Ok(self)
    }

    pub fn url(&self) -> &SearchUrl {
        &self.url
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Issue the GET request for the search page
    pub fn fetch_page(&self) -> error::Result<RawPage> {
        self.config.validate()?;
        match &self.fetcher {
            Some(fetcher) => fetcher.fetch(&self.url),
            None => HttpFetcher::new(&self.config)?.fetch(&self.url),
        }
    }

    /// Pull the embedded JSON out of a fetched page
    pub fn extract_payload(&self, page: &RawPage) -> error::Result<ListingPayload> {
        parsers::extract_payload(&page.body, &self.config.marker)
    }

    /// Read the payload and the displayed result count from a fetched page
    pub fn scrape_page(&self, page: &RawPage) -> error::Result<ScrapedPage> {
        parsers::scrape_page(&page.body, &self.config.marker)
    }

    /// Fetch the page and return its embedded payload.
    ///
    /// Every call makes a fresh request.
    pub fn get_data(&self) -> error::Result<ListingPayload> {
        let page = self.fetch_page()?;
        let payload = self.extract_payload(&page)?;

        match payload.property_count() {
            Some(count) => ::log::info!("Extracted {} properties from {}", count, self.url),
            None => ::log::info!("Extracted payload from {}", self.url),
        }
        Ok(payload)
    }

    /// Fetch, extract and write the payload to `path`
    pub fn scrape_to(&self, path: impl AsRef<Path>) -> error::Result<ListingPayload> {
        let payload = self.get_data()?;
        persist(&payload, path)?;
        Ok(payload)
    }
}
