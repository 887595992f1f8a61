use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, comparers::jaro_winkler},
  query::ParsedQuery,
};

#[scoring_feature(AliasExactMatch, name = "alias_exact_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  if rhs.aliases.iter().any(|alias| *alias == lhs.clean_name) { 1.0 } else { 0.0 }
}

#[scoring_feature(AliasSimilarity, name = "alias_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  let mut best = 0.0f64;

  for alias in &rhs.aliases {
    best = best.max(jaro_winkler(&lhs.clean_name, alias));

    if best >= 1.0 {
      break;
    }
  }

  best
}
