use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, phonetics::metaphone},
  query::ParsedQuery,
};

#[scoring_feature(MetaphoneMatch, name = "metaphone_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  if metaphone(&lhs.clean_name) == metaphone(&rhs.name) { 1.0 } else { 0.0 }
}
