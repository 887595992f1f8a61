//! Sub-fields encoded in the free-text remarks of watch-list records.
//!
//! Upstream lists pack structured data into a single details column, for
//! example `Type: Individual | DOB 12 Mar 1961; nationality Iran | Aliases:
//! Abu Ali; Ali Hassan`. Everything here is best-effort: a field that cannot be
//! found is reported as absent, never as an error.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static KIND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Type:\s*([^|]+)").expect("could not compile type pattern"));
static ALIASES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Aliases:\s*(.+)").expect("could not compile aliases pattern"));
static DOB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"DOB\s+([^;|]+)").expect("could not compile date of birth pattern"));
static NATIONALITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)nationality\s+([^;|]+)").expect("could not compile nationality pattern"));
static POB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"POB\s+([^;|]+)").expect("could not compile place of birth pattern"));
static AKA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"a\.k\.a\.\s+'([^']+)'").expect("could not compile a.k.a. pattern"));
static ALT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"alt\.\s+([^;|]+)").expect("could not compile alt. pattern"));

fn first_capture(pattern: &Regex, remarks: &str) -> Option<String> {
  pattern
    .captures(remarks)
    .and_then(|captures| captures.get(1))
    .map(|value| value.as_str().trim().to_string())
    .filter(|value| !value.is_empty())
}

pub(crate) fn kind(remarks: &str) -> Option<String> {
  first_capture(&KIND, remarks)
}

pub(crate) fn dob(remarks: &str) -> Option<String> {
  first_capture(&DOB, remarks)
}

pub(crate) fn nationality(remarks: &str) -> Option<String> {
  first_capture(&NATIONALITY, remarks)
}

pub(crate) fn pob(remarks: &str) -> Option<String> {
  first_capture(&POB, remarks)
}

/// Names listed after an `Aliases:` marker, separated by semicolons.
pub(crate) fn aliases(remarks: &str) -> Vec<String> {
  let Some(list) = ALIASES.captures(remarks).and_then(|captures| captures.get(1)) else {
    return Vec::new();
  };

  list.as_str().split(';').map(str::trim).filter(|alias| !alias.is_empty()).map(ToOwned::to_owned).collect()
}

/// Names introduced inline with `a.k.a. '...'` or `alt. ...`.
pub(crate) fn other_names(remarks: &str) -> Vec<String> {
  AKA
    .captures_iter(remarks)
    .chain(ALT.captures_iter(remarks))
    .filter_map(|captures| captures.get(1))
    .map(|name| name.as_str().trim().to_string())
    .filter(|name| !name.is_empty())
    .unique()
    .collect()
}
