//! Spawning the refresh tools.

use std::process::Command;

use tracing::debug;

use crate::execute::types::RefreshError;
use crate::tools::ToolCommand;

/// Runs a single tool invocation to completion.
pub trait CommandRunner {
  fn run(&self, command: &ToolCommand) -> Result<(), RefreshError>;
}

/// Runs tools as child processes of the hook.
///
/// The child inherits stdio and the environment, and is waited on before the
/// next step starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, command: &ToolCommand) -> Result<(), RefreshError> {
    debug!(cmd = %command, "spawning process");

    let status = Command::new(&command.program)
      .args(command.args())
      .status()
      .map_err(|source| RefreshError::Spawn {
        program: command.program.clone(),
        source,
      })?;

    if !status.success() {
      return Err(RefreshError::ToolFailed {
        program: command.program.clone(),
        code: status.code(),
      });
    }

    Ok(())
  }
}
