//! Field extraction from listing and vacancy pages.
//!
//! Documents are parsed with `scraper` and never held across an `.await`:
//! every function here takes the raw HTML and returns owned values.
//!
//! ```text
//! listing HTML → ListingEntry*      vacancy HTML → fragments (≥ 8)
//! ```

mod details;
mod listing;

pub use details::{extract_detail_fragments, DetailFragments};
pub use listing::{extract_listing_entries, ListingEntry};

use scraper::{ElementRef, Selector};
use thiserror::Error;

use crate::config::{ConfigError, Presets};

/// Raised when a page does not have the expected structure.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("no element matches the job-detail list selector `{0}`")]
    MissingDetailList(String),

    #[error("job-detail item {index} has no text element")]
    MissingItemText { index: usize },

    #[error("job-detail list has {found} fragments, at least {required} are required")]
    TooFewFragments { found: usize, required: usize },
}

/// Presets compiled into `scraper` selectors.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub(crate) listing_container: Selector,
    pub(crate) listing_link: Selector,
    pub(crate) link_pattern: String,
    pub(crate) title: Selector,
    pub(crate) brief_description: Selector,
    pub(crate) full_description: Selector,
    pub(crate) job_details: Selector,
    pub(crate) job_details_source: String,
    pub(crate) job_detail_item: Selector,
    pub(crate) job_detail_text: Selector,
}

impl SelectorSet {
    pub fn compile(presets: &Presets) -> Result<Self, ConfigError> {
        Ok(Self {
            listing_container: parse("listing_container", &presets.listing_container)?,
            listing_link: parse("listing_link", &presets.listing_link)?,
            link_pattern: presets.link_pattern.clone(),
            title: parse("title", &presets.title)?,
            brief_description: parse("brief_description", &presets.brief_description)?,
            full_description: parse("full_description", &presets.full_description)?,
            job_details: parse("job_details", &presets.job_details)?,
            job_details_source: presets.job_details.clone(),
            job_detail_item: parse("job_detail_item", &presets.job_detail_item)?,
            job_detail_text: parse("job_detail_text", &presets.job_detail_text)?,
        })
    }
}

fn parse(name: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        name,
        message: e.to_string(),
    })
}

/// Trimmed text of the first descendant of `element` matching `selector`.
pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
