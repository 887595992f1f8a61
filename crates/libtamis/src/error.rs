#[derive(Debug, thiserror::Error)]
pub enum TamisError {
  #[error("query does not contain a name")]
  EmptyQuery,
  #[error("malformed entry '{id}': {reason}")]
  MalformedEntry { id: String, reason: String },
  #[error("invalid configuration: {0}")]
  ConfigError(String),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
