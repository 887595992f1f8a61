use std::{
  fs::File,
  io::{BufRead, BufReader, Read},
  path::Path,
};

use anyhow::Context;
use libtamis::prelude::*;
use serde_jsonlines::JsonLinesReader;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
  #[error("unsupported watch-list format: {0}")]
  UnsupportedFormat(String),
}

/// Read a watch-list, picking the format from the file extension.
pub fn load(path: &Path) -> anyhow::Result<Vec<Entry>> {
  let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
  let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default().to_ascii_lowercase();

  let entries = match extension.as_str() {
    "csv" => from_csv(file)?,
    "jsonl" | "ndjson" => from_json_lines(BufReader::new(file))?,
    "json" => from_json(BufReader::new(file))?,
    other => return Err(LoaderError::UnsupportedFormat(other.to_string()).into()),
  };

  tracing::info!(path = %path.display(), entries = entries.len(), "loaded watch-list");

  Ok(entries)
}

/// `uid,name,details` rows, after a header row.
pub fn from_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Entry>> {
  let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
  let mut entries = Vec::new();

  for (line, record) in reader.records().enumerate() {
    let record = record.context("could not read watch-list row")?;

    match (record.get(0), record.get(1), record.get(2)) {
      (Some(uid), Some(name), Some(details)) => entries.push(Entry::from_record(uid, name, details)),
      _ => tracing::warn!(row = line + 1, columns = record.len(), "skipping short watch-list row"),
    }
  }

  Ok(entries)
}

pub fn from_json_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<Entry>> {
  JsonLinesReader::new(reader).read_all::<Entry>().collect::<Result<Vec<_>, _>>().context("could not read watch-list line")
}

pub fn from_json<R: Read>(reader: R) -> anyhow::Result<Vec<Entry>> {
  serde_json::from_reader(reader).context("could not read watch-list")
}
