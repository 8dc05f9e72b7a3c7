mod cmd;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Refresh desktop integration caches after `meson install`.
///
/// Reads MESON_INSTALL_PREFIX and DESTDIR from the environment. Nothing is run
/// when DESTDIR is set, since the package manager owns cache refresh then.
#[derive(Parser)]
#[command(name = "deskrefresh")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Print the commands that would run without running them
  #[arg(long)]
  dry_run: bool,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  if cli.dry_run {
    cmd::cmd_plan(cli.output)
  } else {
    cmd::cmd_refresh(cli.output)
  }
}

/// Logs go to stderr so stdout carries only progress lines.
fn init_tracing(verbose: bool) {
  let fallback = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
