//! Running a [`RefreshPlan`].
//!
//! Every step is advisory. A failing tool is logged and recorded in the
//! [`RefreshReport`], and the remaining steps still run.

mod runner;
mod types;

pub use runner::{CommandRunner, SystemRunner};
pub use types::{RefreshError, RefreshReport, StepReport, StepStatus};

use tracing::{debug, warn};

use crate::plan::RefreshPlan;
use crate::tools::ToolCommand;

/// Run every step of `plan` in order.
///
/// `on_step` is called right before each tool is spawned, which is where
/// callers print progress.
pub fn execute_plan<R, F>(plan: &RefreshPlan, runner: &R, mut on_step: F) -> RefreshReport
where
  R: CommandRunner + ?Sized,
  F: FnMut(&ToolCommand),
{
  let mut steps = Vec::with_capacity(plan.len());

  for command in &plan.steps {
    on_step(command);

    let result = runner.run(command);
    match &result {
      Ok(()) => debug!(tool = %command.tool, "refresh step finished"),
      Err(e) => warn!(tool = %command.tool, error = %e, "refresh step failed, continuing"),
    }

    steps.push(StepReport::from_result(command.clone(), result));
  }

  RefreshReport {
    platform: plan.platform,
    env: plan.env.clone(),
    steps,
  }
}
