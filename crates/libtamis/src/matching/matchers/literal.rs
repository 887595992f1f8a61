use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature},
  query::ParsedQuery,
};

#[scoring_feature(ExactMatch, name = "exact_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  if lhs.clean_name == rhs.name { 1.0 } else { 0.0 }
}

// Both names are lower-cased before any comparison, so this always agrees
// with `exact_match`. It is kept as its own weighted signal.
#[scoring_feature(CaseInsensitiveMatch, name = "case_insensitive_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  if lhs.clean_name.to_lowercase() == rhs.name.to_lowercase() { 1.0 } else { 0.0 }
}
