use bumpalo::Bump;
use tracing::instrument;

use crate::{
  matching::{
    Candidate, Evidence, Feature, FeatureVector, Normalization,
    matchers::{
      alias::{AliasExactMatch, AliasSimilarity},
      dob::{DobExactMatch, DobPartialMatch},
      edit_distance::{CommonPrefix, CommonSuffix, FirstNameMatch, LastNameMatch, LevenshteinSimilarity, NameLengthSimilarity},
      jaro_winkler::JaroWinklerSimilarity,
      literal::{CaseInsensitiveMatch, ExactMatch},
      nationality::{CountryInRemarks, NationalityMatch},
      ngrams::NgramSimilarity,
      phonetic::MetaphoneMatch,
      soundex::SoundexMatch,
      tokens::{InitialsMatch, PartialRatio, TokenSetRatio},
    },
  },
  model::Entry,
  query::ParsedQuery,
};

/// Label reported in screening diagnostics.
pub(crate) const METHOD: &str = "feature-based";

/// Every feature, with its weight and the input it depends on, in reporting
/// order.
pub(crate) const FEATURES: &[(&dyn Feature, f64, Evidence)] = &[
  (&ExactMatch, 1.0, Evidence::Name),
  (&CaseInsensitiveMatch, 0.95, Evidence::Name),
  (&LevenshteinSimilarity, 0.7, Evidence::Name),
  (&JaroWinklerSimilarity, 0.7, Evidence::Name),
  (&SoundexMatch, 0.5, Evidence::Name),
  (&MetaphoneMatch, 0.5, Evidence::Name),
  (&NgramSimilarity, 0.6, Evidence::Name),
  (&TokenSetRatio, 0.65, Evidence::Name),
  (&PartialRatio, 0.5, Evidence::Name),
  (&FirstNameMatch, 0.4, Evidence::Name),
  (&LastNameMatch, 0.5, Evidence::Name),
  (&InitialsMatch, 0.3, Evidence::Name),
  (&NameLengthSimilarity, 0.2, Evidence::Name),
  (&CommonPrefix, 0.3, Evidence::Name),
  (&CommonSuffix, 0.3, Evidence::Name),
  (&AliasExactMatch, 0.9, Evidence::Aliases),
  (&AliasSimilarity, 0.6, Evidence::Aliases),
  (&DobExactMatch, 0.8, Evidence::Dob),
  (&DobPartialMatch, 0.4, Evidence::Dob),
  (&NationalityMatch, 0.5, Evidence::Nationality),
  (&CountryInRemarks, 0.3, Evidence::Remarks),
];

/// Feature names and their weights, in reporting order.
pub(crate) fn weights() -> impl Iterator<Item = (&'static str, f64)> {
  FEATURES.iter().map(|(feature, weight, _)| (feature.name(), *weight))
}

/// Compute every feature for a query and an entry, without aggregating them.
pub fn extract(query: &ParsedQuery, entry: &Entry) -> FeatureVector {
  let bump = Bump::new();
  let rhs = Candidate::new(entry);

  FeatureVector(FEATURES.iter().map(|(feature, _, _)| (feature.name(), feature.score_feature(&bump, query, &rhs))).collect())
}

#[instrument(name = "score_entry", skip_all, fields(entry_id = rhs.id))]
pub(crate) fn score(bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate<'_>, normalization: Normalization) -> (f64, FeatureVector) {
  let mut results = Vec::with_capacity(FEATURES.len());
  let mut total = 0.0f64;
  let mut denominator = 0.0f64;

  for (func, weight, evidence) in FEATURES {
    let feature_score = func.score_feature(bump, lhs, rhs);

    results.push((func.name(), feature_score));

    tracing::debug!(feature = func.name(), score = feature_score, "computed feature score");

    total += feature_score * weight;

    if normalization == Normalization::FullTable || evidence.is_available(lhs, rhs) {
      denominator += weight;
    }
  }

  if denominator <= 0.0 {
    return (0.0, FeatureVector(results));
  }

  ((total / denominator).clamp(0.0, 1.0), FeatureVector(results))
}
