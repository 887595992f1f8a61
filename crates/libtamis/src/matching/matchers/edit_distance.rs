use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{
    Candidate, Feature,
    comparers::{common_prefix_length, common_suffix_length, length_similarity, levenshtein_similarity},
    extractors::{first_token, last_token},
  },
  query::ParsedQuery,
};

#[scoring_feature(LevenshteinSimilarity, name = "levenshtein_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  levenshtein_similarity(&lhs.clean_name, &rhs.name)
}

#[scoring_feature(FirstNameMatch, name = "first_name_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  match (first_token(&lhs.clean_name), first_token(&rhs.name)) {
    (Some(lhs), Some(rhs)) => levenshtein_similarity(lhs, rhs),
    _ => 0.0,
  }
}

#[scoring_feature(LastNameMatch, name = "last_name_match")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  match (last_token(&lhs.clean_name), last_token(&rhs.name)) {
    (Some(lhs), Some(rhs)) => levenshtein_similarity(lhs, rhs),
    _ => 0.0,
  }
}

#[scoring_feature(NameLengthSimilarity, name = "name_length_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  length_similarity(&lhs.clean_name, &rhs.name)
}

// Prefix and suffix are relative to the query, so a short query fully
// contained at the start (or end) of a long name still scores 1.0.
#[scoring_feature(CommonPrefix, name = "common_prefix")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  common_prefix_length(&lhs.clean_name, &rhs.name) as f64 / lhs.clean_name.chars().count().max(1) as f64
}

#[scoring_feature(CommonSuffix, name = "common_suffix")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  common_suffix_length(&lhs.clean_name, &rhs.name) as f64 / lhs.clean_name.chars().count().max(1) as f64
}
