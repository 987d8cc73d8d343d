use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ValidationError;
use crate::extractor::ExtractionError;

#[derive(Error, Debug)]
pub enum JobcrawlError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{label} failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        label: String,
        attempts: u32,
        #[source]
        source: Box<JobcrawlError>,
    },

    #[error("Listing page {page} could not be fetched: {source}")]
    ListingFetch {
        page: u32,
        #[source]
        source: Box<JobcrawlError>,
    },
}

pub type Result<T> = std::result::Result<T, JobcrawlError>;
