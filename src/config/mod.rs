//! Configuration management for jobcrawl.
//!
//! Configuration is read from `~/.config/jobcrawl/config.toml` unless a path
//! is given. If the file doesn't exist, a default configuration with comments
//! is created there. Every section is optional; missing values fall back to
//! their defaults.

pub mod presets;

pub use presets::Presets;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlSettings,
    pub http: HttpSettings,
    pub retry: RetrySettings,
    pub browser: BrowserSettings,
    pub output: OutputSettings,
    pub presets: Presets,
}

/// What to crawl and how fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlSettings {
    /// Listing root; relative vacancy links are resolved against it
    pub base_url: String,

    /// Query parameter carrying the page number (default: "page")
    pub pagination_param: String,

    /// Stop before this page number; 0 or absent means no limit
    pub page_limit: Option<u32>,

    /// Pause after every vacancy page fetch in milliseconds (default: 1000)
    pub sleep_time_ms: u64,

    /// Log every parsed vacancy (default: false)
    pub verbose_logging: bool,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.example.com/vacatures/".to_string(),
            pagination_param: "page".to_string(),
            page_limit: None,
            sleep_time_ms: 1000,
            verbose_logging: false,
        }
    }
}

impl CrawlSettings {
    /// Parse the configured base URL
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    /// The page limit, treating 0 as unlimited
    pub fn page_limit(&self) -> Option<u32> {
        self.page_limit.filter(|&limit| limit > 0)
    }

    pub fn sleep_time(&self) -> Duration {
        Duration::from_millis(self.sleep_time_ms)
    }
}

/// Plain HTTP client used for vacancy pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub user_agent: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Extra attempts when the connection cannot be established (default: 3)
    pub connect_retries: u32,

    /// Extra attempts when the response times out or its body fails (default: 3)
    pub read_retries: u32,

    /// Maximum redirects followed per request (default: 3)
    pub redirect_limit: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            timeout_secs: 30,
            connect_retries: 3,
            read_retries: 3,
            redirect_limit: 3,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Exponential backoff around both page fetchers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Lower bound of a single wait in seconds (default: 2)
    pub min_wait_secs: f64,

    /// Upper bound of a single wait in seconds (default: 5)
    pub max_wait_secs: f64,

    /// Scale of the exponential term (default: 1)
    pub multiplier: f64,

    /// Attempts before giving up, including the first one (default: 5)
    pub max_attempts: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            min_wait_secs: 2.0,
            max_wait_secs: 5.0,
            multiplier: 1.0,
            max_attempts: 5,
        }
    }
}

/// Headless browser used for listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Page load timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Wait time after page load for dynamic content in milliseconds (default: 1000)
    pub wait_after_load_ms: u64,

    /// User agent override for the browser
    pub user_agent: Option<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            timeout_secs: 30,
            wait_after_load_ms: 1000,
            user_agent: None,
        }
    }
}

impl BrowserSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn wait_after_load(&self) -> Duration {
        Duration::from_millis(self.wait_after_load_ms)
    }
}

/// Where the results go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Write the results as CSV (default: true)
    pub save_to_file: bool,

    pub path: PathBuf,

    /// Prefix nested columns with their parent, e.g. `position_details.location`
    pub prefix_nested_keys: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            save_to_file: true,
            path: PathBuf::from("vacancies.csv"),
            prefix_nested_keys: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            tracing::info!("Wrote default configuration to {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an existing file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.crawl.base_url()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/jobcrawl/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("jobcrawl").join("config.toml"))
    }

    /// Create a default config file with comments.
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# jobcrawl configuration

[crawl]
# Listing root; vacancy links are resolved against it
base_url = "https://www.example.com/vacatures/"

# Query parameter holding the page number: <base_url>?page=N
pagination_param = "page"

# Stop before this page number (0 = crawl until a page has no listings)
page_limit = 0

# Pause after every vacancy page fetch (milliseconds)
sleep_time_ms = 1000

# Log every parsed vacancy
verbose_logging = false

[http]
user_agent = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
timeout_secs = 30
connect_retries = 3
read_retries = 3
redirect_limit = 3

[retry]
# wait = min(max_wait, max(min_wait, multiplier * 2^(attempt - 1))) seconds
min_wait_secs = 2.0
max_wait_secs = 5.0
multiplier = 1.0
max_attempts = 5

[browser]
# Run browser in headless mode (no visible window)
headless = true

# Page load timeout in seconds
timeout_secs = 30

# Wait time after page load for dynamic content (milliseconds)
wait_after_load_ms = 1000

[output]
save_to_file = true
path = "vacancies.csv"

# Name nested columns "position_details.location" instead of "location"
prefix_nested_keys = true

[presets]
listing_container = "div.search-results"
listing_link = "a"
link_pattern = "vacature/"
title = "h2.vacancy-title"
brief_description = "span.vacancy-brief"
full_description = "div.vacancy-description"
job_details = "ul.job-details"
job_detail_item = "li"
job_detail_text = "span"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Invalid selector for preset `{name}`: {message}")]
    InvalidSelector { name: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.crawl.pagination_param, "page");
        assert_eq!(config.crawl.page_limit(), None);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.presets, Presets::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[crawl]
base_url = "https://jobs.example.org/"
page_limit = 4
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.crawl.page_limit(), Some(4));
        assert_eq!(
            config.crawl.base_url().unwrap().as_str(),
            "https://jobs.example.org/"
        );
        // Untouched sections keep defaults
        assert_eq!(config.crawl.sleep_time(), Duration::from_millis(1000));
        assert_eq!(config.http.connect_retries, 3);
        assert!(config.browser.headless);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.retry.min_wait_secs, 2.0);
        assert_eq!(config.retry.max_wait_secs, 5.0);
        assert!(config.output.save_to_file);
    }

    #[test]
    fn test_zero_page_limit_is_unlimited() {
        let config: Config = toml::from_str("[crawl]\npage_limit = 0\n").unwrap();
        assert_eq!(config.crawl.page_limit(), None);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.crawl.pagination_param, "page");

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.presets, config.presets);
    }

    #[test]
    fn test_load_rejects_bad_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[crawl]\nbase_url = \"not a url\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[crawl\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
