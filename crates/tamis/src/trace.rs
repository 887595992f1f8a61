use std::io::Write;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};

use crate::config::Env;

/// Log subscriber writing through a non-blocking appender.
///
/// Events are flushed to `writer` until the returned guard is dropped.
pub fn subscriber(env: &Env, filter: &str, writer: impl Write + Send + 'static) -> (impl Subscriber + Send + Sync + 'static, WorkerGuard) {
  let (appender, guard) = tracing_appender::non_blocking(writer);

  let logging_formatter = match env {
    #[cfg(not(test))]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(true).boxed(),
    Env::Production => json_subscriber::layer()
      .with_writer(appender)
      .flatten_event(true)
      .flatten_span_list_on_top_level(true)
      .with_current_span(false)
      .with_span_list(false)
      .boxed(),

    #[cfg(test)]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(false).boxed(),
  };

  let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

  (tracing_subscriber::registry().with(filter.and_then(logging_formatter)), guard)
}

pub fn init_tracing(env: &Env, filter: &str, writer: impl Write + Send + 'static) -> anyhow::Result<WorkerGuard> {
  let (subscriber, guard) = subscriber(env, filter, writer);

  tracing::subscriber::set_global_default(subscriber)?;

  Ok(guard)
}
