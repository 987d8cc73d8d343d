use std::path::Path;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::crawler::Crawler;
use crate::fetcher::{BrowserFetcher, DocumentFetcher, HttpFetcher};

/// Wires configuration, fetchers and the crawler together.
pub struct AppContext {
    pub config: Config,
    pub crawler: Crawler,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let listing_fetcher: Arc<dyn DocumentFetcher> =
            Arc::new(BrowserFetcher::new(config.browser.clone()));
        let detail_fetcher: Arc<dyn DocumentFetcher> = Arc::new(HttpFetcher::new(&config.http)?);
        let crawler = Crawler::new(&config, listing_fetcher, detail_fetcher)?;

        Ok(Self { config, crawler })
    }

    /// Load the configuration from `path` (or the default location) and
    /// build the context from it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::new(Config::load(path)?)
    }
}
