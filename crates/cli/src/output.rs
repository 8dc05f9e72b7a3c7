//! CLI output formatting utilities.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const WARNING: &str = "⚠";
  pub const ARROW: &str = "→";
}

pub fn print_planned(command_line: &str) {
  println!(
    "{} would run: {}",
    symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()),
    command_line
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

/// Summary shown after a run where some tools failed.
pub fn failure_summary(failed: usize, total: usize) -> String {
  let noun = if total == 1 { "step" } else { "steps" };
  format!("{failed} of {total} cache refresh {noun} failed; desktop caches may be stale")
}
