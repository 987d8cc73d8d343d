use serde::{Deserialize, Serialize};

/// CSS selectors locating each region of the listing and vacancy pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    /// Block wrapping the results on a listing page
    pub listing_container: String,

    /// Links to vacancy pages inside a listing container
    pub listing_link: String,

    /// Only links whose href contains this fragment are followed (empty: all)
    pub link_pattern: String,

    /// Title element inside a listing link
    pub title: String,

    /// Brief description element inside a listing link
    pub brief_description: String,

    /// Full description element inside a listing link
    pub full_description: String,

    /// The structural list holding the job details on a vacancy page
    pub job_details: String,

    /// Items of the job-detail list
    pub job_detail_item: String,

    /// First element inside an item carrying its text
    pub job_detail_text: String,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            listing_container: "div.search-results".to_string(),
            listing_link: "a".to_string(),
            link_pattern: "vacature/".to_string(),
            title: "h2.vacancy-title".to_string(),
            brief_description: "span.vacancy-brief".to_string(),
            full_description: "div.vacancy-description".to_string(),
            job_details: "ul.job-details".to_string(),
            job_detail_item: "li".to_string(),
            job_detail_text: "span".to_string(),
        }
    }
}
