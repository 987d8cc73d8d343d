use serde::{Deserialize, Serialize};

use crate::domain::normalize::{capitalize, strip_salary_range};
use crate::domain::ValidationError;

/// Number of fragments a job-detail block must have at minimum.
pub const MIN_DETAIL_FRAGMENTS: usize = 8;

/// Structured fields taken from the job-detail list of a vacancy page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDetails {
    location: String,
    salary_range: String,
    job_type: String,
    contract_type: String,
    position_name: String,
    industry: String,
    required_education: String,
    time_length: Option<String>,
    hours: String,
}

impl PositionDetails {
    /// Build from positional fragments.
    ///
    /// Layout: location, salary range, job type, contract type, position
    /// name, industry, required education, then an optional time length
    /// (only present when there are more than eight fragments) and hours
    /// as the last fragment.
    pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<Self, ValidationError> {
        if fragments.len() < MIN_DETAIL_FRAGMENTS {
            return Err(ValidationError::TooFewFragments {
                found: fragments.len(),
                required: MIN_DETAIL_FRAGMENTS,
            });
        }

        let field = |i: usize| fragments[i].as_ref();
        let time_length = (fragments.len() > MIN_DETAIL_FRAGMENTS).then(|| field(7).to_string());

        Ok(Self {
            location: capitalize(field(0)),
            salary_range: strip_salary_range(field(1)),
            job_type: capitalize(field(2)),
            contract_type: capitalize(field(3)),
            position_name: capitalize(field(4)),
            industry: capitalize(field(5)),
            required_education: field(6).to_string(),
            time_length,
            hours: field(fragments.len() - 1).to_string(),
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn salary_range(&self) -> &str {
        &self.salary_range
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn contract_type(&self) -> &str {
        &self.contract_type
    }

    pub fn position_name(&self) -> &str {
        &self.position_name
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn required_education(&self) -> &str {
        &self.required_education
    }

    pub fn time_length(&self) -> Option<&str> {
        self.time_length.as_deref()
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(n: usize) -> Vec<String> {
        let base = [
            "aMSTERDAM",
            "€ 2.500 -\u{a0}€ 3.000",
            "VAST",
            "FULLTIME contract",
            "sENIOR developer",
            "ICT",
            "HBO",
            "6 maanden",
            "40 uur",
        ];
        match n {
            8 => vec![
                base[0], base[1], base[2], base[3], base[4], base[5], base[6], base[8],
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            _ => base.iter().take(n).map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_eight_fragments_have_no_time_length() {
        let details = PositionDetails::from_fragments(&fragments(8)).unwrap();
        assert_eq!(details.time_length(), None);
        assert_eq!(details.hours(), "40 uur");
        assert_eq!(details.required_education(), "HBO");
    }

    #[test]
    fn test_nine_fragments_set_time_length() {
        let details = PositionDetails::from_fragments(&fragments(9)).unwrap();
        assert_eq!(details.time_length(), Some("6 maanden"));
        assert_eq!(details.hours(), "40 uur");
    }

    #[test]
    fn test_extra_fragments_take_last_as_hours() {
        let mut input = fragments(9);
        input.push("32 uur".into());
        let details = PositionDetails::from_fragments(&input).unwrap();
        assert_eq!(details.time_length(), Some("6 maanden"));
        assert_eq!(details.hours(), "32 uur");
    }

    #[test]
    fn test_fields_are_normalized() {
        let details = PositionDetails::from_fragments(&fragments(9)).unwrap();
        assert_eq!(details.location(), "Amsterdam");
        assert_eq!(details.salary_range(), "€2.500-€3.000");
        assert_eq!(details.job_type(), "Vast");
        assert_eq!(details.contract_type(), "Fulltime contract");
        assert_eq!(details.position_name(), "Senior developer");
        assert_eq!(details.industry(), "Ict");
    }

    #[test]
    fn test_too_few_fragments_rejected() {
        let err = PositionDetails::from_fragments(&fragments(6)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooFewFragments {
                found: 6,
                required: 8
            }
        ));
    }

    #[test]
    fn test_renormalizing_is_stable() {
        let first = PositionDetails::from_fragments(&fragments(9)).unwrap();
        let again = PositionDetails::from_fragments(&[
            first.location(),
            first.salary_range(),
            first.job_type(),
            first.contract_type(),
            first.position_name(),
            first.industry(),
            first.required_education(),
            first.time_length().unwrap(),
            first.hours(),
        ])
        .unwrap();
        assert_eq!(first, again);
    }
}
