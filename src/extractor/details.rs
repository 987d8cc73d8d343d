use scraper::Html;

use crate::domain::MIN_DETAIL_FRAGMENTS;
use crate::extractor::{first_text, ExtractionError, SelectorSet};

/// Ordered text fragments from the job-detail list of a vacancy page.
pub type DetailFragments = Vec<String>;

/// Pull one fragment per item of the first job-detail list on the page.
///
/// Each fragment is the trimmed text of the first text element inside the
/// item. A page without the list, an item without a text element, or a list
/// shorter than [`MIN_DETAIL_FRAGMENTS`] is rejected.
pub fn extract_detail_fragments(
    html: &str,
    selectors: &SelectorSet,
) -> Result<DetailFragments, ExtractionError> {
    let document = Html::parse_document(html);

    let list = document
        .select(&selectors.job_details)
        .next()
        .ok_or_else(|| ExtractionError::MissingDetailList(selectors.job_details_source.clone()))?;

    let fragments = list
        .select(&selectors.job_detail_item)
        .enumerate()
        .map(|(index, item)| {
            first_text(item, &selectors.job_detail_text)
                .ok_or(ExtractionError::MissingItemText { index })
        })
        .collect::<Result<DetailFragments, _>>()?;

    if fragments.len() < MIN_DETAIL_FRAGMENTS {
        return Err(ExtractionError::TooFewFragments {
            found: fragments.len(),
            required: MIN_DETAIL_FRAGMENTS,
        });
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Presets;

    fn selectors() -> SelectorSet {
        SelectorSet::compile(&Presets::default()).unwrap()
    }

    fn detail_page(values: &[&str]) -> String {
        let items: String = values
            .iter()
            .map(|v| format!("<li><span> {v} </span><span>ignored</span></li>"))
            .collect();
        format!(r#"<html><body><ul class="job-details">{items}</ul></body></html>"#)
    }

    #[test]
    fn test_extracts_first_span_per_item() {
        let html = detail_page(&["Utrecht", "€ 3.000", "Vast", "Fulltime", "Dev", "ICT", "WO", "40"]);
        let fragments = extract_detail_fragments(&html, &selectors()).unwrap();
        assert_eq!(
            fragments,
            vec!["Utrecht", "€ 3.000", "Vast", "Fulltime", "Dev", "ICT", "WO", "40"]
        );
    }

    #[test]
    fn test_missing_list_is_error() {
        let html = "<html><body><ul class=\"other\"><li><span>x</span></li></ul></body></html>";
        let err = extract_detail_fragments(html, &selectors()).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingDetailList(ref s) if s == "ul.job-details"));
    }

    #[test]
    fn test_fewer_than_eight_fragments_is_error() {
        let html = detail_page(&["a", "b", "c", "d", "e", "f"]);
        let err = extract_detail_fragments(&html, &selectors()).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::TooFewFragments {
                found: 6,
                required: 8
            }
        ));
    }

    #[test]
    fn test_item_without_text_element_is_error() {
        let html = r#"<ul class="job-details">
            <li><span>a</span></li><li>bare</li>
        </ul>"#;
        let err = extract_detail_fragments(html, &selectors()).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingItemText { index: 1 }));
    }

    #[test]
    fn test_only_first_list_is_used() {
        let first = detail_page(&["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        let html = first.replace(
            "</body>",
            r#"<ul class="job-details"><li><span>x</span></li></ul></body>"#,
        );
        let fragments = extract_detail_fragments(&html, &selectors()).unwrap();
        assert_eq!(fragments.len(), 9);
    }
}
