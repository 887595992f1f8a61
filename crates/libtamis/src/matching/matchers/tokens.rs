use ahash::HashSet;
use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{
    Candidate, Feature,
    comparers::{partial_ratio, token_set_ratio},
    extractors::initials,
  },
  query::ParsedQuery,
};

#[scoring_feature(TokenSetRatio, name = "token_set_ratio")]
fn score_feature(&self, bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  token_set_ratio(bump, &lhs.clean_name, &rhs.name)
}

#[scoring_feature(PartialRatio, name = "partial_ratio")]
fn score_feature(&self, bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  partial_ratio(bump, &lhs.clean_name, &rhs.name)
}

#[scoring_feature(InitialsMatch, name = "initials_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  let lhs_initials = initials(&lhs.clean_name);
  let rhs_initials = initials(&rhs.name);

  if lhs_initials == rhs_initials {
    return 1.0;
  }

  let lhs_set = lhs_initials.chars().collect::<HashSet<_>>();
  let rhs_set = rhs_initials.chars().collect::<HashSet<_>>();

  if lhs_set == rhs_set { 0.5 } else { 0.0 }
}
