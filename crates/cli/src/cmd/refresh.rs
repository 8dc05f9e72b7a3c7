//! The default hook behavior: refresh desktop caches for a live install.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use deskrefresh_lib::{
  CommandRunner, InstallEnv, PlatformFamily, RefreshPlan, RefreshReport, SystemRunner, execute_plan,
};

use crate::output::{OutputFormat, failure_summary, print_json, print_warning};

const WINDOWS_BANNER: &str = "Detected Windows environment!";

/// Execute the refresh.
///
/// Tool failures are reported but never turn into a non-zero exit, so a
/// missing `gtk-update-icon-cache` cannot break `meson install`.
pub fn cmd_refresh(format: OutputFormat) -> Result<()> {
  let plan = RefreshPlan::new(InstallEnv::from_env(), PlatformFamily::current());
  let mut stdout = std::io::stdout();

  let report = run_with_progress(&plan, &SystemRunner, !format.is_json(), &mut stdout)?;

  debug!(
    succeeded = report.succeeded(),
    failed = report.failed(),
    "desktop cache refresh finished"
  );

  if format.is_json() {
    print_json(&report)?;
  } else if !report.is_success() {
    print_warning(&failure_summary(report.failed(), report.steps.len()));
  }

  Ok(())
}

/// Run `plan`, writing the Windows banner and one progress line per step to
/// `out` when `progress` is set. Each line is flushed before its tool spawns.
fn run_with_progress<R, W>(plan: &RefreshPlan, runner: &R, progress: bool, out: &mut W) -> Result<RefreshReport>
where
  R: CommandRunner + ?Sized,
  W: Write,
{
  if progress && plan.announces_windows() {
    writeln!(out, "{}", WINDOWS_BANNER).context("Failed to write progress")?;
  }

  let mut write_error = None;
  let report = execute_plan(plan, runner, |cmd| {
    if progress && write_error.is_none() {
      let written = writeln!(out, "{}", cmd.tool.progress_message()).and_then(|_| out.flush());
      write_error = written.err();
    }
  });

  if let Some(e) = write_error {
    return Err(e).context("Failed to write progress");
  }

  Ok(report)
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::*;
  use deskrefresh_lib::{RefreshError, ToolCommand};

  /// Shared log of progress output and spawned programs, in the order they happened.
  type Events = Rc<RefCell<Vec<String>>>;

  struct LoggingRunner(Events);

  impl CommandRunner for LoggingRunner {
    fn run(&self, command: &ToolCommand) -> Result<(), RefreshError> {
      self.0.borrow_mut().push(format!("spawn {}", command.program));
      Ok(())
    }
  }

  struct LoggingWriter(Events, Vec<u8>);

  impl Write for LoggingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.1.extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      let text = String::from_utf8_lossy(&self.1).into_owned();
      self.0.borrow_mut().extend(text.lines().map(str::to_string));
      self.1.clear();
      Ok(())
    }
  }

  fn live_plan(platform: PlatformFamily) -> RefreshPlan {
    RefreshPlan::new(InstallEnv::from_vars(Some("/opt/app".into()), None), platform)
  }

  #[test]
  fn windows_banner_precedes_progress_lines() {
    let mut out = Vec::new();
    let runner = LoggingRunner(Events::default());

    run_with_progress(&live_plan(PlatformFamily::Windows), &runner, true, &mut out).unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "Detected Windows environment!\n\
       Updating icon cache...\n\
       Updating desktop database...\n\
       Compiling GSettings schemas...\n"
    );
  }

  #[test]
  fn other_platform_prints_only_progress_lines() {
    let mut out = Vec::new();
    let runner = LoggingRunner(Events::default());

    run_with_progress(&live_plan(PlatformFamily::Other), &runner, true, &mut out).unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      "Updating icon cache...\nUpdating desktop database...\nCompiling GSettings schemas...\n"
    );
  }

  #[test]
  fn each_progress_line_is_flushed_before_its_tool_spawns() {
    let events = Events::default();
    let runner = LoggingRunner(events.clone());
    let mut out = LoggingWriter(events.clone(), Vec::new());

    run_with_progress(&live_plan(PlatformFamily::Windows), &runner, true, &mut out).unwrap();
    out.flush().unwrap();

    assert_eq!(
      *events.borrow(),
      vec![
        "Detected Windows environment!",
        "Updating icon cache...",
        "spawn gtk-update-icon-cache-3.0.exe",
        "Updating desktop database...",
        "spawn update-desktop-database.exe",
        "Compiling GSettings schemas...",
        "spawn glib-compile-schemas.exe",
      ]
    );
  }

  #[test]
  fn staged_windows_install_writes_nothing() {
    let mut out = Vec::new();
    let events = Events::default();
    let runner = LoggingRunner(events.clone());
    let plan = RefreshPlan::new(
      InstallEnv::from_vars(None, Some("/build/pkgroot".into())),
      PlatformFamily::Windows,
    );

    let report = run_with_progress(&plan, &runner, true, &mut out).unwrap();

    assert!(out.is_empty());
    assert!(events.borrow().is_empty());
    assert!(report.steps.is_empty());
  }

  #[test]
  fn json_mode_suppresses_progress() {
    let mut out = Vec::new();
    let runner = LoggingRunner(Events::default());

    let report = run_with_progress(&live_plan(PlatformFamily::Windows), &runner, false, &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(report.steps.len(), 3);
  }
}
