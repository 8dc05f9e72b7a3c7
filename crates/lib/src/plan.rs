//! Deciding which refresh steps a given install needs.

use serde::Serialize;
use tracing::{debug, info};

use crate::env::{InstallEnv, InstallMode};
use crate::platform::PlatformFamily;
use crate::tools::{RefreshTool, ToolCommand};

/// The ordered refresh steps for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshPlan {
  pub platform: PlatformFamily,
  #[serde(flatten)]
  pub env: InstallEnv,
  pub steps: Vec<ToolCommand>,
}

impl RefreshPlan {
  /// Compute the plan for an install environment.
  ///
  /// A staged install yields an empty plan: the package manager refreshes
  /// caches itself once the package lands on a real system.
  pub fn new(env: InstallEnv, platform: PlatformFamily) -> Self {
    let steps = match &env.mode {
      InstallMode::Staged(root) => {
        info!(destdir = %root.display(), "staged install, skipping desktop cache refresh");
        Vec::new()
      }
      InstallMode::Live => {
        let datadir = env.datadir();
        RefreshTool::ALL
          .iter()
          .map(|tool| ToolCommand::new(*tool, platform, &datadir))
          .collect()
      }
    };

    debug!(platform = %platform, steps = steps.len(), "computed refresh plan");

    Self { platform, env, steps }
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// Whether the Windows detection line is printed ahead of the steps.
  pub fn announces_windows(&self) -> bool {
    self.platform.is_windows() && !self.is_empty()
  }
}
