use bon::bon;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{error::TamisError, remarks};

/// Program assigned to records that do not carry one.
pub const DEFAULT_PROGRAM: &str = "SDN";

/// One watch-list record.
///
/// Entries are produced by whatever ingests the upstream lists and are only
/// ever borrowed by the screening engine. Only `id` and `name` are mandatory,
/// every other field may be empty or absent.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct Entry {
  #[validate(custom(function = "not_blank"))]
  pub id: String,
  #[validate(custom(function = "not_blank"))]
  pub name: String,
  #[serde(rename = "type", default)]
  pub kind: String,
  #[serde(default)]
  pub program: String,
  #[serde(default)]
  pub aliases: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dob: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nationality: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pob: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub remarks: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank").with_message("must not be blank".into()));
  }

  Ok(())
}

impl Entry {
  /// Build an entry from a `(uid, name, details)` list row.
  ///
  /// The details column is kept verbatim as the remarks, and the structured
  /// sub-fields it encodes (type, aliases, date and place of birth,
  /// nationality) are lifted into their own fields.
  pub fn from_record(uid: &str, name: &str, details: &str) -> Entry {
    let mut aliases = remarks::aliases(details);

    for other in remarks::other_names(details) {
      if !aliases.contains(&other) {
        aliases.push(other);
      }
    }

    Entry {
      id: uid.trim().to_string(),
      name: name.trim().to_string(),
      kind: remarks::kind(details).unwrap_or_default(),
      program: DEFAULT_PROGRAM.to_string(),
      aliases,
      dob: remarks::dob(details),
      nationality: remarks::nationality(details),
      pob: remarks::pob(details),
      remarks: Some(details.to_string()).filter(|details| !details.is_empty()),
    }
  }

  pub(crate) fn check(&self) -> Result<(), TamisError> {
    self.validate().map_err(|err| TamisError::MalformedEntry {
      id: self.id.clone(),
      reason: err.to_string(),
    })
  }
}

#[bon]
impl Entry {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] id: &str,
    #[builder(start_fn)] name: &str,
    kind: Option<&str>,
    program: Option<&str>,
    #[builder(default)] aliases: &[&str],
    dob: Option<&str>,
    nationality: Option<&str>,
    pob: Option<&str>,
    remarks: Option<&str>,
  ) -> Entry {
    Entry {
      id: id.to_string(),
      name: name.trim().to_string(),
      kind: kind.unwrap_or_default().to_string(),
      program: program.unwrap_or_default().to_string(),
      aliases: aliases.iter().map(|alias| alias.trim().to_string()).collect(),
      dob: dob.map(ToOwned::to_owned),
      nationality: nationality.map(ToOwned::to_owned),
      pob: pob.map(ToOwned::to_owned),
      remarks: remarks.map(ToOwned::to_owned),
    }
  }
}
