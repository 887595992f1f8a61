use std::{fmt, time::Instant};

use bumpalo::Bump;
use metrics::histogram;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use tracing::{Span, instrument};

use crate::{
  error::TamisError,
  matching::{Candidate, FeatureVector, Normalization, feature_based, features_to_map},
  model::Entry,
  query::ParsedQuery,
};

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LIMIT: usize = 10;

/// Settings held by a [`Screener`] for its whole lifetime.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScreeningConfig {
  /// Minimum score, inclusive, for an entry to be reported.
  #[serde_inline_default(DEFAULT_THRESHOLD)]
  pub threshold: f64,
  #[serde_inline_default(DEFAULT_LIMIT)]
  pub limit: usize,
  #[serde(default)]
  pub normalization: Normalization,
}

impl Default for ScreeningConfig {
  fn default() -> ScreeningConfig {
    ScreeningConfig {
      threshold: DEFAULT_THRESHOLD,
      limit: DEFAULT_LIMIT,
      normalization: Normalization::default(),
    }
  }
}

impl ScreeningConfig {
  pub fn validate(&self) -> Result<(), TamisError> {
    if !(0.0..=1.0).contains(&self.threshold) {
      return Err(TamisError::ConfigError(format!("threshold must be within [0, 1], got {}", self.threshold)));
    }

    Ok(())
  }
}

/// Ordered confidence label derived from an aggregate score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Confidence {
  #[serde(rename = "LOW")]
  Low,
  #[serde(rename = "LOW-MEDIUM")]
  LowMedium,
  #[serde(rename = "MEDIUM")]
  Medium,
  #[serde(rename = "MEDIUM-HIGH")]
  MediumHigh,
  #[serde(rename = "HIGH")]
  High,
}

impl Confidence {
  pub fn from_score(score: f64) -> Confidence {
    match score {
      s if s >= 0.8 => Confidence::High,
      s if s >= 0.6 => Confidence::MediumHigh,
      s if s >= 0.4 => Confidence::Medium,
      s if s >= 0.2 => Confidence::LowMedium,
      _ => Confidence::Low,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Confidence::Low => "LOW",
      Confidence::LowMedium => "LOW-MEDIUM",
      Confidence::Medium => "MEDIUM",
      Confidence::MediumHigh => "MEDIUM-HIGH",
      Confidence::High => "HIGH",
    }
  }
}

impl fmt::Display for Confidence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One entry that scored at or above the threshold.
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult<'e> {
  pub entry: &'e Entry,
  pub score: f64,
  pub confidence: Confidence,
  pub features: FeatureVector,
  pub matched_features: Vec<&'static str>,
  pub feature_count: usize,

  /// Position of the entry in the screened collection.
  #[serde(skip)]
  pub index: usize,
}

impl<'e> MatchResult<'e> {
  fn new(entry: &'e Entry, index: usize, score: f64, features: FeatureVector) -> MatchResult<'e> {
    let matched_features = features.matched().map(|(name, _)| name).collect::<Vec<_>>();

    MatchResult {
      entry,
      score,
      confidence: Confidence::from_score(score),
      feature_count: matched_features.len(),
      matched_features,
      features,
      index,
    }
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct ResultDetail {
  pub name: String,
  pub score: f64,
  pub confidence: Confidence,
  pub feature_count: usize,
  #[serde(serialize_with = "features_to_map")]
  pub features: Vec<(&'static str, f64)>,
}

/// Explanation of a screening pass.
#[derive(Clone, Debug, Serialize)]
pub struct ScreeningDetails {
  pub method: &'static str,
  pub total_features: usize,
  pub query_parsed: Option<ParsedQuery>,
  pub matches_found: usize,
  #[serde(serialize_with = "features_to_map")]
  pub feature_weights: Vec<(&'static str, f64)>,
  pub normalization: Normalization,
  pub skipped_entries: usize,
  pub results_detail: Vec<ResultDetail>,
}

impl ScreeningDetails {
  fn new(query: Option<ParsedQuery>, normalization: Normalization, skipped_entries: usize, results: &[MatchResult<'_>]) -> ScreeningDetails {
    ScreeningDetails {
      method: feature_based::METHOD,
      total_features: feature_based::FEATURES.len(),
      query_parsed: query,
      matches_found: results.len(),
      feature_weights: feature_based::weights().collect(),
      normalization,
      skipped_entries,
      results_detail: results
        .iter()
        .map(|result| ResultDetail {
          name: result.entry.name.clone(),
          score: round3(result.score),
          confidence: result.confidence,
          feature_count: result.feature_count,
          features: result.features.matched().map(|(name, value)| (name, round3(value))).collect(),
        })
        .collect(),
    }
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct Screening<'e> {
  pub results: Vec<MatchResult<'e>>,
  pub details: ScreeningDetails,
}

/// Screens queries against borrowed watch-list entries.
#[derive(Clone, Debug, Default)]
pub struct Screener {
  config: ScreeningConfig,
}

impl Screener {
  pub fn new(config: ScreeningConfig) -> Result<Screener, TamisError> {
    config.validate()?;

    Ok(Screener { config })
  }

  pub fn config(&self) -> &ScreeningConfig {
    &self.config
  }

  /// Screen a query, reporting a query without a name as having no match.
  ///
  /// At most `max_results` entries are reported, or the configured limit when
  /// it is `None`.
  pub fn screen<'e>(&self, query: &str, entries: &'e [Entry], max_results: Option<usize>) -> Screening<'e> {
    match self.try_screen(query, entries, max_results) {
      Ok(screening) => screening,

      Err(err) => {
        tracing::info!(error = %err, "query cannot match any entry");

        Screening {
          results: Vec::new(),
          details: ScreeningDetails::new(None, self.config.normalization, 0, &[]),
        }
      }
    }
  }

  #[instrument(name = "screen", skip_all, fields(entries = entries.len(), normalization = %self.config.normalization))]
  pub fn try_screen<'e>(&self, query: &str, entries: &'e [Entry], max_results: Option<usize>) -> Result<Screening<'e>, TamisError> {
    let query = ParsedQuery::parse(query)?;
    let span = Span::current();
    let then = Instant::now();

    tracing::info!(name = %query.name, dob = ?query.dob, nationality = ?query.nationality, "screening query");

    let scores = entries
      .par_iter()
      .enumerate()
      .map_init(
        || Bump::with_capacity(1024),
        |bump, (index, entry)| -> Result<Option<MatchResult<'e>>, TamisError> {
          let _enter = span.enter();

          entry.check()?;

          let (score, features) = feature_based::score(bump, &query, &Candidate::new(entry), self.config.normalization);

          bump.reset();

          tracing::debug!(entry_id = %entry.id, score = score, "computed score");

          histogram!("tamis_scoring_scores").record(score);

          Ok((score >= self.config.threshold).then(|| MatchResult::new(entry, index, score, features)))
        },
      )
      .collect::<Vec<_>>();

    let mut skipped = 0;
    let mut results = Vec::new();

    for score in scores {
      match score {
        Ok(Some(result)) => results.push(result),
        Ok(None) => {}
        Err(err) => {
          tracing::warn!(error = %err, "skipping malformed entry");

          skipped += 1;
        }
      }
    }

    results.sort_by(|lhs, rhs| rhs.score.total_cmp(&lhs.score).then(lhs.index.cmp(&rhs.index)));
    results.truncate(max_results.unwrap_or(self.config.limit));

    histogram!("tamis_scoring_latency_seconds").record(then.elapsed().as_secs_f64());

    tracing::info!(matches = results.len(), skipped = skipped, latency = ?then.elapsed(), "screening complete");

    let details = ScreeningDetails::new(Some(query), self.config.normalization, skipped, &results);

    Ok(Screening { results, details })
  }
}

/// Round half away from zero to three decimals.
fn round3(value: f64) -> f64 {
  (value * 1000.0).round() / 1000.0
}
