//! Pagination driver.
//!
//! ```text
//! Fetching(1) → Extracting(1) → Fetching(2) → … → Done
//!      │
//!      └── listing fetch exhausts retries ──→ Fatal
//! ```
//!
//! Listing pages are rendered by the browser fetcher, vacancy pages are
//! fetched over HTTP. Everything runs strictly in order: one page, then its
//! entries in document order, then the next page.

mod rate_limiter;

pub use rate_limiter::RateLimiter;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::app::{JobcrawlError, Result};
use crate::config::Config;
use crate::domain::normalize::resolve_url;
use crate::domain::{PositionDetails, ValidationError, Vacancy};
use crate::extractor::{
    extract_detail_fragments, extract_listing_entries, ListingEntry, SelectorSet,
};
use crate::fetcher::{DocumentFetcher, RetryPolicy};

/// Where the driver is in the crawl.
#[derive(Debug)]
pub enum CrawlState {
    /// About to fetch the given listing page
    Fetching(u32),
    /// Listing page fetched, entries not yet processed
    Extracting { page: u32, html: String },
    Done,
    Fatal(JobcrawlError),
}

impl CrawlState {
    /// State after a listing page with `entries` entries was processed.
    pub fn after_page(page: u32, entries: usize, page_limit: Option<u32>) -> Self {
        if entries == 0 {
            return CrawlState::Done;
        }
        let next = page.saturating_add(1);
        match page_limit {
            Some(limit) if next >= limit => CrawlState::Done,
            _ => CrawlState::Fetching(next),
        }
    }
}

/// A listing entry that produced no vacancy.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub page: u32,
    pub href: String,
    pub reason: String,
}

/// Everything a finished crawl produced.
#[derive(Debug, Default)]
pub struct CrawlReport {
    pub vacancies: Vec<Vacancy>,
    pub pages_fetched: u32,
    pub skipped: Vec<SkippedEntry>,
}

pub struct Crawler {
    listing_fetcher: Arc<dyn DocumentFetcher>,
    detail_fetcher: Arc<dyn DocumentFetcher>,
    retry: RetryPolicy,
    rate_limiter: RateLimiter,
    selectors: SelectorSet,
    base_url: Url,
    pagination_param: String,
    page_limit: Option<u32>,
    verbose: bool,
}

impl Crawler {
    pub fn new(
        config: &Config,
        listing_fetcher: Arc<dyn DocumentFetcher>,
        detail_fetcher: Arc<dyn DocumentFetcher>,
    ) -> Result<Self> {
        Ok(Self {
            listing_fetcher,
            detail_fetcher,
            retry: RetryPolicy::from_settings(&config.retry),
            rate_limiter: RateLimiter::new(config.crawl.sleep_time()),
            selectors: SelectorSet::compile(&config.presets)?,
            base_url: config.crawl.base_url()?,
            pagination_param: config.crawl.pagination_param.clone(),
            page_limit: config.crawl.page_limit(),
            verbose: config.crawl.verbose_logging,
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// URL of listing page `page`: `<base>?<param>=<page>`.
    pub fn listing_url(&self, page: u32) -> Result<Url> {
        Ok(self
            .base_url
            .join(&format!("?{}={}", self.pagination_param, page))?)
    }

    /// Crawl every page and return the vacancies in page and document order.
    pub async fn run(&self) -> Result<Vec<Vacancy>> {
        Ok(self.crawl().await?.vacancies)
    }

    /// Crawl every page, also reporting page count and skipped entries.
    ///
    /// A listing page that cannot be fetched aborts the crawl; vacancies
    /// gathered from earlier pages are dropped with it.
    pub async fn crawl(&self) -> Result<CrawlReport> {
        info!("Starting crawl of {}", self.base_url);
        let mut report = CrawlReport::default();
        let mut state = CrawlState::Fetching(1);

        loop {
            state = match state {
                CrawlState::Fetching(page) => match self.fetch_listing(page).await {
                    Ok(html) => {
                        report.pages_fetched += 1;
                        CrawlState::Extracting { page, html }
                    }
                    Err(e) => CrawlState::Fatal(JobcrawlError::ListingFetch {
                        page,
                        source: Box::new(e),
                    }),
                },
                CrawlState::Extracting { page, html } => {
                    let entries = extract_listing_entries(&html, &self.selectors);
                    info!("Parsing page {} ({} listings)", page, entries.len());

                    for entry in &entries {
                        match self.process_entry(entry).await {
                            Ok(vacancy) => {
                                if self.verbose {
                                    info!("New position parsed: {:?}", vacancy);
                                }
                                report.vacancies.push(vacancy);
                            }
                            Err(e) => {
                                warn!("Skipping {} on page {}: {}", entry.href, page, e);
                                report.skipped.push(SkippedEntry {
                                    page,
                                    href: entry.href.clone(),
                                    reason: e.to_string(),
                                });
                            }
                        }
                    }

                    CrawlState::after_page(page, entries.len(), self.page_limit)
                }
                CrawlState::Done => {
                    info!(
                        "Crawl finished: {} vacancies from {} pages, {} skipped",
                        report.vacancies.len(),
                        report.pages_fetched,
                        report.skipped.len()
                    );
                    return Ok(report);
                }
                CrawlState::Fatal(e) => {
                    error!(
                        "Crawl aborted, discarding {} vacancies: {}",
                        report.vacancies.len(),
                        e
                    );
                    return Err(e);
                }
            };
        }
    }

    async fn fetch_listing(&self, page: u32) -> Result<String> {
        let url = self.listing_url(page)?;
        debug!("Fetching listing page {}", url);
        self.retry
            .run("listing page", || self.listing_fetcher.fetch(&url))
            .await
    }

    /// Fetch, extract and validate one listing entry.
    async fn process_entry(&self, entry: &ListingEntry) -> Result<Vacancy> {
        let url = resolve_url(&self.base_url, &entry.href).map_err(|source| {
            ValidationError::InvalidUrl {
                url: entry.href.clone(),
                source,
            }
        })?;

        debug!("Fetching vacancy page {}", url);
        let html = self
            .retry
            .run("vacancy page", || self.detail_fetcher.fetch(&url))
            .await?;
        self.rate_limiter.wait().await;

        let fragments = extract_detail_fragments(&html, &self.selectors)?;
        let details = PositionDetails::from_fragments(&fragments)?;
        Ok(Vacancy::from_entry(entry, details, &self.base_url)?)
    }
}
