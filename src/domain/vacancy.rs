use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::normalize::{capitalize, resolve_url};
use crate::domain::{PositionDetails, ValidationError};
use crate::extractor::ListingEntry;

/// A single job listing together with the details from its own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    title: String,
    brief_description: String,
    full_description: String,
    url: String,
    position_details: PositionDetails,
    date_parsed: DateTime<Utc>,
}

impl Vacancy {
    /// Build a vacancy; `url` is resolved against `base_url` and the parse
    /// timestamp defaults to now.
    pub fn new(
        title: &str,
        brief_description: &str,
        full_description: &str,
        url: &str,
        position_details: PositionDetails,
        base_url: &Url,
        date_parsed: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let url = resolve_url(base_url, url).map_err(|source| ValidationError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(Self {
            title: capitalize(title),
            brief_description: brief_description.to_string(),
            full_description: full_description.to_string(),
            url: url.to_string(),
            position_details,
            date_parsed: date_parsed.unwrap_or_else(Utc::now),
        })
    }

    /// Build a vacancy from a listing entry, rejecting entries that lack a
    /// title or either description.
    pub fn from_entry(
        entry: &ListingEntry,
        position_details: PositionDetails,
        base_url: &Url,
    ) -> Result<Self, ValidationError> {
        let title = entry
            .title
            .as_deref()
            .ok_or(ValidationError::MissingField("title"))?;
        let brief = entry
            .brief_description
            .as_deref()
            .ok_or(ValidationError::MissingField("brief_description"))?;
        let full = entry
            .full_description
            .as_deref()
            .ok_or(ValidationError::MissingField("full_description"))?;

        Self::new(title, brief, full, &entry.href, position_details, base_url, None)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn brief_description(&self) -> &str {
        &self.brief_description
    }

    pub fn full_description(&self) -> &str {
        &self.full_description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn position_details(&self) -> &PositionDetails {
        &self.position_details
    }

    pub fn date_parsed(&self) -> DateTime<Utc> {
        self.date_parsed
    }
}
