use std::{fs, path::PathBuf};

use clap::Parser;
use libtamis::prelude::*;
use serde_json::{Value, json};
use serde_json_assert::assert_json_include;

use crate::{config::Cli, config::Env, tests::log_writer::CapturedLogs, trace};


const WATCH_LIST: &str = "uid,name,details\n\
                          1,John Smith,Type: Individual\n\
                          2,Maria Lopez,Type: Individual | DOB 15/03/1980; nationality Mexico\n\
                          3,AEROCARIBBEAN AIRLINES,Type: Entity | Aliases: AERO-CARIBBEAN; AEROCARIBE\n";

fn watch_list(name: &str) -> PathBuf {
  let path = std::env::temp_dir().join(format!("tamis-{}-{name}.csv", std::process::id()));

  fs::write(&path, WATCH_LIST).unwrap();

  path
}

fn run(args: &[&str]) -> Value {
  let cli = Cli::try_parse_from(args).unwrap();
  let mut output = Vec::new();

  crate::run(&cli, &mut output).unwrap();

  serde_json::from_slice(&output).unwrap()
}

#[test]
fn results_only() {
  let path = watch_list("results");
  let output = run(&["tamis", "Jon Smyth", "--entries", path.to_str().unwrap()]);

  assert_json_include!(
    actual: output,
    expected: json!([{
      "entry": { "id": "1", "name": "John Smith", "type": "Individual", "program": "SDN" },
      "confidence": "MEDIUM",
      "features": { "exact_match": 0.0, "soundex_match": 1.0 }
    }])
  );
}

#[test]
fn with_details() {
  let path = watch_list("details");
  let output = run(&["tamis", "Maria Lopez, 1980", "-e", path.to_str().unwrap(), "--details", "--limit", "1"]);

  assert_eq!(output["results"].as_array().map(Vec::len), Some(1));

  assert_json_include!(
    actual: output,
    expected: json!({
      "results": [{ "entry": { "id": "2", "dob": "15/03/1980" }, "confidence": "HIGH" }],
      "details": {
        "method": "feature-based",
        "query_parsed": { "name": "Maria Lopez", "dob": "1980" },
        "matches_found": 1,
        "normalization": "evidence",
      }
    })
  );
}

#[test]
fn empty_query_fails() {
  let path = watch_list("empty");
  let cli = Cli::try_parse_from(["tamis", " , 1980", "-e", path.to_str().unwrap()]).unwrap();

  assert!(crate::run(&cli, Vec::new()).is_err());
}

#[test]
fn invalid_threshold_fails() {
  let path = watch_list("threshold");
  let cli = Cli::try_parse_from(["tamis", "John Smith", "-e", path.to_str().unwrap(), "-t", "2"]).unwrap();

  assert!(crate::run(&cli, Vec::new()).is_err());
}

#[test]
fn unsupported_format_fails() {
  let path = std::env::temp_dir().join(format!("tamis-{}.xml", std::process::id()));

  fs::write(&path, "<sdnList/>").unwrap();

  let cli = Cli::try_parse_from(["tamis", "John Smith", "-e", path.to_str().unwrap()]).unwrap();

  assert!(crate::run(&cli, Vec::new()).is_err());
}

#[test]
fn dev_logs() {
  let entries = vec![Entry::builder("1", "John Smith").build(), Entry::builder("", "Nobody").build()];
  let logs = CapturedLogs::default();

  {
    let (subscriber, _guard) = trace::subscriber(&Env::Dev, "info", logs.clone());

    tracing::subscriber::with_default(subscriber, || Screener::default().screen("John Smith", &entries, Some(10)));
  }

  let lines = logs.lines();

  assert!(lines.iter().any(|line| line.contains("screening query") && line.contains("name=John Smith")));
  assert!(lines.iter().any(|line| line.contains("screening complete") && line.contains("matches=1") && line.contains("skipped=1")));
  assert!(lines.iter().any(|line| line.contains("WARN") && line.contains("skipping malformed entry")));

  let logs = CapturedLogs::default();

  {
    let (subscriber, _guard) = trace::subscriber(&Env::Dev, "warn", logs.clone());

    tracing::subscriber::with_default(subscriber, || Screener::default().screen("John Smith", &entries, Some(10)));
  }

  let lines = logs.lines();

  assert_eq!(lines.len(), 1);
  assert!(lines[0].contains("skipping malformed entry"));
}

#[test]
fn production_logs() {
  let entries = vec![Entry::builder("1", "John Smith").build()];
  let logs = CapturedLogs::default();

  {
    let (subscriber, _guard) = trace::subscriber(&Env::Production, "warn", logs.clone());

    tracing::subscriber::with_default(subscriber, || Screener::default().screen("John Smith", &entries, Some(10)));
  }

  assert!(logs.lines().is_empty());

  let logs = CapturedLogs::default();

  {
    let (subscriber, _guard) = trace::subscriber(&Env::Production, "info", logs.clone());

    tracing::subscriber::with_default(subscriber, || Screener::default().screen("John Smith", &entries, Some(10)));
  }

  let events = logs.lines().iter().map(|line| serde_json::from_str::<Value>(line).unwrap()).collect::<Vec<_>>();

  assert!(events.iter().any(|event| event["message"] == "screening complete" && event["level"] == "INFO"));
}
