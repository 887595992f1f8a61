use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{error::TamisError, matching::extractors};

static FULL_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").expect("could not compile date pattern"));
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("could not compile year pattern"));

/// Segments containing a bare year are only taken as a date when they are at
/// most this long.
const YEAR_SEGMENT_MAX_LEN: usize = 10;

/// A screening query split into its name and optional hints.
///
/// Queries are written as `name[, hint[, hint...]]`, where each hint is either
/// a date of birth (`15/03/1980`, `1980-3-15`, `1980`) or a nationality.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedQuery {
  pub name: String,
  pub dob: Option<String>,
  pub nationality: Option<String>,
  pub raw_query: String,

  // Those attributes are precomputed once per query to skip the computation for every screened entry.
  #[serde(skip)]
  pub(crate) clean_name: String,
  #[serde(skip)]
  pub(crate) dob_digits: Option<String>,
  #[serde(skip)]
  pub(crate) clean_nationality: Option<String>,
}

impl ParsedQuery {
  /// Split a raw, comma-delimited query.
  ///
  /// The first segment is the name and must not be blank. Among the following
  /// segments, the first date-like one is the date of birth and the last other
  /// one is the nationality. Blank segments are ignored.
  pub fn parse(raw: &str) -> Result<ParsedQuery, TamisError> {
    let mut segments = raw.split(',').map(str::trim);
    let name = segments.next().unwrap_or_default();

    if name.is_empty() {
      return Err(TamisError::EmptyQuery);
    }

    let mut dob = None;
    let mut nationality = None;

    for segment in segments.filter(|segment| !segment.is_empty()) {
      if is_date_like(segment) {
        dob = dob.or(Some(segment));
      } else {
        nationality = Some(segment);
      }
    }

    let mut query = ParsedQuery {
      name: name.to_string(),
      dob: dob.map(ToOwned::to_owned),
      nationality: nationality.map(ToOwned::to_owned),
      raw_query: raw.to_string(),
      ..Default::default()
    };

    query.precompute();

    Ok(query)
  }

  fn precompute(&mut self) {
    self.clean_name = extractors::clean(&self.name);
    self.dob_digits = self.dob.as_deref().map(extractors::digits);
    self.clean_nationality = self.nationality.as_deref().map(extractors::clean).filter(|nationality| !nationality.is_empty());
  }
}

/// Whether a query segment reads as a date rather than a nationality.
pub(crate) fn is_date_like(segment: &str) -> bool {
  FULL_DATE.is_match(segment) || (YEAR.is_match(segment) && segment.chars().count() <= YEAR_SEGMENT_MAX_LEN)
}
