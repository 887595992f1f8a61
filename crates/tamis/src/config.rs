use std::path::PathBuf;

use clap::Parser;
use libtamis::{
  prelude::*,
  scoring::{DEFAULT_LIMIT, DEFAULT_THRESHOLD},
};

/// Screen a name against a sanctions watch-list.
#[derive(Debug, Parser)]
#[command(name = "tamis", version, about, long_about = None)]
pub struct Cli {
  /// Query, as `name[, date of birth][, nationality]`
  pub query: String,

  /// Watch-list file (`.csv`, `.jsonl`, `.ndjson` or `.json`)
  #[arg(short, long, env = "TAMIS_ENTRIES")]
  pub entries: PathBuf,

  /// Minimum score for an entry to be reported
  #[arg(short, long, env = "TAMIS_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
  pub threshold: f64,

  /// Maximum number of reported entries
  #[arg(short, long, env = "TAMIS_LIMIT", default_value_t = DEFAULT_LIMIT)]
  pub limit: usize,

  /// Score denominator, `evidence` or `full-table`
  #[arg(short, long, env = "TAMIS_NORMALIZATION", default_value = "evidence")]
  pub normalization: Normalization,

  /// Print the screening diagnostics alongside the results
  #[arg(short, long)]
  pub details: bool,

  #[arg(long, env = "ENV", default_value = "dev")]
  pub env: Env,

  #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
  pub log_filter: String,
}

impl Cli {
  pub fn screening_config(&self) -> ScreeningConfig {
    ScreeningConfig {
      threshold: self.threshold,
      limit: self.limit,
      normalization: self.normalization,
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}
