//! deskrefresh-lib: desktop cache refresh for Meson post-install hooks
//!
//! After an application is installed into a prefix, the icon theme cache,
//! desktop entry database and compiled GSettings schemas need rebuilding
//! before the desktop picks the new files up. This crate provides:
//! - `InstallEnv`: the prefix and staging root handed over by Meson
//! - `RefreshPlan`: the ordered tool invocations a given install needs
//! - `execute_plan`: best-effort execution through a `CommandRunner`

pub mod consts;
pub mod env;
pub mod execute;
pub mod plan;
pub mod platform;
pub mod tools;

pub use env::{InstallEnv, InstallMode};
pub use execute::{CommandRunner, RefreshError, RefreshReport, StepReport, StepStatus, SystemRunner, execute_plan};
pub use plan::RefreshPlan;
pub use platform::PlatformFamily;
pub use tools::{RefreshTool, ToolCommand};
