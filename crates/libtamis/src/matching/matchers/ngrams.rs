use bumpalo::Bump;
use libtamis_macros::scoring_feature;

use crate::{
  matching::{Candidate, Feature, comparers::ngram_similarity},
  query::ParsedQuery,
};

const NGRAM_SIZE: usize = 2;

#[scoring_feature(NgramSimilarity, name = "ngram_similarity")]
fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
  ngram_similarity(&lhs.clean_name, &rhs.name, NGRAM_SIZE)
}
