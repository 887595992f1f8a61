use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, comparers::jaro_winkler},
  query::ParsedQuery,
};

#[scoring_feature(JaroWinklerSimilarity, name = "jaro_winkler_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  jaro_winkler(&lhs.clean_name, &rhs.name)
}
