//! Error and report types for plan execution.

use serde::Serialize;
use thiserror::Error;

use crate::env::InstallEnv;
use crate::platform::PlatformFamily;
use crate::tools::ToolCommand;

/// Errors that can occur while running a refresh tool.
#[derive(Debug, Error)]
pub enum RefreshError {
  /// The program could not be started (missing from `PATH`, not executable, ...).
  #[error("failed to start {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The program ran and exited unsuccessfully.
  #[error("{program} exited with code {code:?}")]
  ToolFailed { program: String, code: Option<i32> },
}

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepStatus {
  Succeeded,
  Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
  #[serde(flatten)]
  pub command: ToolCommand,
  #[serde(flatten)]
  pub status: StepStatus,
}

impl StepReport {
  pub fn from_result(command: ToolCommand, result: Result<(), RefreshError>) -> Self {
    let status = match result {
      Ok(()) => StepStatus::Succeeded,
      Err(e) => StepStatus::Failed { error: e.to_string() },
    };
    Self { command, status }
  }

  pub fn is_success(&self) -> bool {
    matches!(self.status, StepStatus::Succeeded)
  }
}

/// What happened during one run of the hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
  pub platform: PlatformFamily,
  #[serde(flatten)]
  pub env: InstallEnv,
  pub steps: Vec<StepReport>,
}

impl RefreshReport {
  pub fn succeeded(&self) -> usize {
    self.steps.iter().filter(|s| s.is_success()).count()
  }

  pub fn failed(&self) -> usize {
    self.steps.len() - self.succeeded()
  }

  pub fn is_success(&self) -> bool {
    self.failed() == 0
  }
}
