use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetchers::Fetcher;
use crate::results::RawPage;
use crate::search_url::SearchUrl;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Fetches pages over HTTP with a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client that presents itself like a desktop browser
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Self::client_builder(config)?
            .build()
            .map_err(|e| ScrapeError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Client builder preloaded with the browser-like headers and timeout
    pub fn client_builder(config: &ScraperConfig) -> Result<ClientBuilder> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| ScrapeError::Config(format!("accept_language: {}", e)))?,
        );

        Ok(Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs)))
    }

    /// Use an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &SearchUrl) -> Result<RawPage> {
        ::log::info!("Fetching {}", url);

        let network_err = |source| ScrapeError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.as_url().clone())
            .send()
            .map_err(network_err)?;

        let status = response.status();
        ::log::debug!("{} answered {}", url, status);
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(network_err)?;
        ::log::debug!("Read {} bytes from {}", body.len(), url);

        Ok(RawPage::new(url.as_str(), body))
    }
}
