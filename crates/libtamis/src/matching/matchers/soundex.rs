use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, phonetics::soundex},
  query::ParsedQuery,
};

#[scoring_feature(SoundexMatch, name = "soundex_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  if soundex(&lhs.clean_name) == soundex(&rhs.name) { 1.0 } else { 0.0 }
}
