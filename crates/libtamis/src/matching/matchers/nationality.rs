use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, comparers::jaro_winkler},
  query::ParsedQuery,
};

#[scoring_feature(NationalityMatch, name = "nationality_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  match (lhs.clean_nationality.as_deref(), rhs.nationality.as_deref()) {
    (Some(lhs), Some(rhs)) => jaro_winkler(lhs, rhs),
    _ => 0.0,
  }
}

#[scoring_feature(CountryInRemarks, name = "country_in_remarks")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  match (lhs.clean_nationality.as_deref(), rhs.remarks.as_deref()) {
    (Some(nationality), Some(remarks)) if remarks.contains(nationality) => 1.0,
    _ => 0.0,
  }
}
