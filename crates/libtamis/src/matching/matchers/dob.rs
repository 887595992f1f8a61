use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature},
  query::ParsedQuery,
};

/// Trailing (year) or leading digit run compared by the partial match.
const DATE_PART_LEN: usize = 4;

const YEAR_MATCH: f64 = 0.7;
const LEADING_MATCH: f64 = 0.5;

#[scoring_feature(DobExactMatch, name = "dob_exact_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  match (lhs.dob_digits.as_deref(), rhs.dob_digits.as_deref()) {
    (Some(lhs), Some(rhs)) if !lhs.is_empty() && lhs == rhs => 1.0,
    _ => 0.0,
  }
}

#[scoring_feature(DobPartialMatch, name = "dob_partial_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  let (Some(lhs), Some(rhs)) = (lhs.dob_digits.as_deref(), rhs.dob_digits.as_deref()) else {
    return 0.0;
  };

  // Digits are ASCII, byte offsets are character offsets.
  if lhs.len() < DATE_PART_LEN || rhs.len() < DATE_PART_LEN {
    return 0.0;
  }

  if lhs[lhs.len() - DATE_PART_LEN..] == rhs[rhs.len() - DATE_PART_LEN..] {
    return YEAR_MATCH;
  }

  if rhs.contains(&lhs[..DATE_PART_LEN]) || lhs.contains(&rhs[..DATE_PART_LEN]) {
    return LEADING_MATCH;
  }

  0.0
}
