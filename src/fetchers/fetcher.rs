use crate::error::Result;
use crate::results::RawPage;
use crate::search_url::SearchUrl;

/// Source of raw result pages
pub trait Fetcher {
    /// Retrieve the page at `url`.
    ///
    /// Implementations make a single attempt and report non-success
    /// responses as errors.
    fn fetch(&self, url: &SearchUrl) -> Result<RawPage>;
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &SearchUrl) -> Result<RawPage> {
        (**self).fetch(url)
    }
}
