mod matchers;

use std::{fmt, str::FromStr};

use bumpalo::Bump;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::{error::TamisError, model::Entry, query::ParsedQuery};

pub(crate) mod comparers;
pub(crate) mod extractors;
pub(crate) mod feature_based;
pub(crate) mod phonetics;
pub(crate) mod sequence;

#[cfg(test)]
mod tests;

/// One similarity signal between a query and a watch-list entry.
///
/// Implementations are usually generated by `#[scoring_feature]` and must
/// return a value within `[0, 1]`.
pub(crate) trait Feature: Send + Sync {
  fn name(&self) -> &'static str;
  fn score_feature(&self, bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate<'_>) -> f64;
}

/// Lower-cased view of an [`Entry`], built once per screened entry.
pub(crate) struct Candidate<'e> {
  pub(crate) id: &'e str,
  pub(crate) name: String,
  pub(crate) aliases: Vec<String>,
  pub(crate) dob_digits: Option<String>,
  pub(crate) nationality: Option<String>,
  pub(crate) remarks: Option<String>,
}

impl<'e> Candidate<'e> {
  pub(crate) fn new(entry: &'e Entry) -> Candidate<'e> {
    Candidate {
      id: &entry.id,
      name: extractors::clean(&entry.name),
      aliases: entry.aliases.iter().map(|alias| extractors::clean(alias)).filter(|alias| !alias.is_empty()).collect(),
      dob_digits: present(entry.dob.as_deref()).map(extractors::digits).filter(|digits| !digits.is_empty()),
      nationality: present(entry.nationality.as_deref()).map(str::to_lowercase),
      remarks: present(entry.remarks.as_deref()).map(str::to_lowercase),
    }
  }
}

#[inline]
fn present(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|value| !value.is_empty())
}

/// Input a feature depends on, used to decide whether its weight counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Evidence {
  /// Both names, always available.
  Name,
  /// At least one alias on the entry.
  Aliases,
  /// A date of birth on both sides.
  Dob,
  /// A nationality on both sides.
  Nationality,
  /// A nationality in the query and remarks on the entry.
  Remarks,
}

impl Evidence {
  pub(crate) fn is_available(self, lhs: &ParsedQuery, rhs: &Candidate<'_>) -> bool {
    match self {
      Evidence::Name => true,
      Evidence::Aliases => !rhs.aliases.is_empty(),
      Evidence::Dob => lhs.dob_digits.is_some() && rhs.dob_digits.is_some(),
      Evidence::Nationality => lhs.clean_nationality.is_some() && rhs.nationality.is_some(),
      Evidence::Remarks => lhs.clean_nationality.is_some() && rhs.remarks.is_some(),
    }
  }
}

/// Which feature weights make up the denominator of the aggregate score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Normalization {
  /// Only features whose inputs are present on both sides.
  #[default]
  #[serde(rename = "evidence")]
  Evidence,
  /// Every feature of the weight table, present or not.
  #[serde(rename = "full-table")]
  FullTable,
}

impl Normalization {
  pub fn as_str(&self) -> &'static str {
    match self {
      Normalization::Evidence => "evidence",
      Normalization::FullTable => "full-table",
    }
  }
}

impl fmt::Display for Normalization {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Normalization {
  type Err = TamisError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "evidence" => Ok(Normalization::Evidence),
      "full-table" => Ok(Normalization::FullTable),
      other => Err(TamisError::ConfigError(format!("unsupported normalization: {other}"))),
    }
  }
}

/// A feature counts as matched when it carries any signal at all.
#[inline]
pub fn is_matched(value: f64) -> bool {
  value > 0.0
}

/// Every feature value computed for one (query, entry) pair, in weight table
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureVector(pub(crate) Vec<(&'static str, f64)>);

impl FeatureVector {
  pub fn get(&self, name: &str) -> Option<f64> {
    self.0.iter().find(|(feature, _)| *feature == name).map(|(_, value)| *value)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
    self.0.iter().copied()
  }

  pub fn matched(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
    self.iter().filter(|(_, value)| is_matched(*value))
  }

  pub fn matched_count(&self) -> usize {
    self.matched().count()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl Serialize for FeatureVector {
  fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
    features_to_map(&self.0, ser)
  }
}

pub(crate) fn features_to_map<S: Serializer>(input: &[(&'static str, f64)], ser: S) -> Result<S::Ok, S::Error> {
  let mut map = ser.serialize_map(Some(input.len()))?;
  for (k, v) in input {
    map.serialize_entry(k, v)?;
  }
  map.end()
}
