//! `deskrefresh --dry-run`: show the refresh plan without spawning anything.

use anyhow::Result;

use deskrefresh_lib::{InstallEnv, InstallMode, PlatformFamily, RefreshPlan};

use crate::output::{OutputFormat, print_json, print_planned};

pub fn cmd_plan(format: OutputFormat) -> Result<()> {
  let plan = RefreshPlan::new(InstallEnv::from_env(), PlatformFamily::current());

  if format.is_json() {
    return print_json(&plan);
  }

  if let InstallMode::Staged(root) = &plan.env.mode {
    println!("DESTDIR is set to {}; cache refresh is left to the package manager", root.display());
    return Ok(());
  }

  for step in &plan.steps {
    print_planned(&step.command_line());
  }

  Ok(())
}
