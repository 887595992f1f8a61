mod config;
mod loader;
mod trace;

#[cfg(test)]
mod tests;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use libtamis::prelude::*;

use crate::config::Cli;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let _guard = trace::init_tracing(&cli.env, &cli.log_filter, io::stderr())?;

  run(&cli, io::stdout().lock())
}

fn run(cli: &Cli, mut output: impl Write) -> anyhow::Result<()> {
  let entries = loader::load(&cli.entries)?;
  let screener = Screener::new(cli.screening_config())?;
  let screening = screener.try_screen(&cli.query, &entries, None)?;

  let written = if cli.details {
    serde_json::to_writer_pretty(&mut output, &screening)
  } else {
    serde_json::to_writer_pretty(&mut output, &screening.results)
  };

  written.context("could not write screening results")?;

  writeln!(output)?;

  Ok(())
}
