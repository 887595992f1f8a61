mod error;
mod matching;
mod model;
mod query;
mod remarks;

pub mod scoring;

/// String similarity primitives the screening features are built on.
pub mod similarity {
  pub use crate::matching::comparers::{
    common_prefix_length, common_suffix_length, jaro_winkler, length_similarity, levenshtein_similarity, ngram_similarity, partial_ratio, token_set_ratio,
  };
  pub use crate::matching::phonetics::{metaphone, soundex};
  pub use crate::matching::sequence::sequence_ratio;
}

pub mod prelude {
  pub use crate::error::TamisError;
  pub use crate::matching::{FeatureVector, Normalization, feature_based::extract, is_matched};
  pub use crate::model::{DEFAULT_PROGRAM, Entry};
  pub use crate::query::ParsedQuery;
  pub use crate::scoring::{Confidence, MatchResult, ResultDetail, Screener, Screening, ScreeningConfig, ScreeningDetails};
}
