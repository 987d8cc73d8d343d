pub mod normalize;
pub mod position;
pub mod vacancy;

pub use position::{PositionDetails, MIN_DETAIL_FRAGMENTS};
pub use vacancy::Vacancy;

use thiserror::Error;

/// Raised when extracted values cannot be turned into a record.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("expected at least {required} detail fragments, found {found}")]
    TooFewFragments { found: usize, required: usize },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("cannot resolve URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
