//! # jobcrawl
//!
//! Crawls a paginated job board into structured vacancy records.
//!
//! ## Architecture
//!
//! ```text
//! Crawler → Fetchers (browser / HTTP) → Extractor → Validator → Vec<Vacancy>
//!                                         ↑
//!                       RateLimiter between vacancy fetches
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Write ~/.config/jobcrawl/config.toml and edit base_url / presets
//! jobcrawl init-config
//!
//! # Crawl the first four pages into a CSV file
//! jobcrawl crawl --page-limit 5 --output vacancies.csv
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the
/// configuration, both fetchers and the crawler.
pub mod app;

/// Command-line interface using clap.
///
/// - `crawl` - Crawl the site and write the CSV
/// - `init-config` - Write the default configuration file
pub mod cli;

/// Configuration loaded from `~/.config/jobcrawl/config.toml`.
pub mod config;

/// Pagination driver and rate limiter.
pub mod crawler;

/// Vacancy records and their field normalizers.
///
/// - [`Vacancy`](domain::Vacancy): one listing with its details
/// - [`PositionDetails`](domain::PositionDetails): fields from the vacancy page
pub mod domain;

/// Field extraction from listing and vacancy pages.
pub mod extractor;

/// Page fetching.
///
/// - [`DocumentFetcher`](fetcher::DocumentFetcher): Async trait for page fetching
/// - [`BrowserFetcher`](fetcher::BrowserFetcher): headless Chrome via chromiumoxide
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`RetryPolicy`](fetcher::RetryPolicy): exponential backoff around both
pub mod fetcher;

/// Flattening and CSV output.
pub mod output;
