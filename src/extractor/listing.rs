use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::extractor::{first_text, SelectorSet};

/// One vacancy link found on a listing page.
///
/// Text fields are `None` when the listing markup lacks them; the vacancy
/// builder decides whether that is fatal for the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub href: String,
    pub title: Option<String>,
    pub brief_description: Option<String>,
    pub full_description: Option<String>,
}

/// Collect vacancy links from a listing page in document order.
pub fn extract_listing_entries(html: &str, selectors: &SelectorSet) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for container in document.select(&selectors.listing_container) {
        for link in container.select(&selectors.listing_link) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if !href.contains(selectors.link_pattern.as_str()) {
                continue;
            }

            entries.push(ListingEntry {
                href: href.trim().to_string(),
                title: first_text(link, &selectors.title),
                brief_description: first_text(link, &selectors.brief_description),
                full_description: first_text(link, &selectors.full_description),
            });
        }
    }

    tracing::debug!("Extracted {} listing entries", entries.len());
    entries
}
