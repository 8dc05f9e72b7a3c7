//! The desktop integration tools and how each one is invoked.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{APPLICATIONS_DIR, HICOLOR_ICONS_DIR, SCHEMAS_DIR};
use crate::platform::PlatformFamily;

/// One of the cache-rebuilding tools run after install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshTool {
  IconCache,
  DesktopDatabase,
  Schemas,
}

impl RefreshTool {
  /// Every tool, in invocation order.
  pub const ALL: [RefreshTool; 3] = [RefreshTool::IconCache, RefreshTool::DesktopDatabase, RefreshTool::Schemas];

  /// Executable name looked up on `PATH`.
  pub fn program(&self, platform: PlatformFamily) -> &'static str {
    match (self, platform) {
      (Self::IconCache, PlatformFamily::Windows) => "gtk-update-icon-cache-3.0.exe",
      (Self::IconCache, PlatformFamily::Other) => "gtk-update-icon-cache",
      (Self::DesktopDatabase, PlatformFamily::Windows) => "update-desktop-database.exe",
      (Self::DesktopDatabase, PlatformFamily::Other) => "update-desktop-database",
      (Self::Schemas, PlatformFamily::Windows) => "glib-compile-schemas.exe",
      (Self::Schemas, PlatformFamily::Other) => "glib-compile-schemas",
    }
  }

  /// Flags passed ahead of the target directory.
  pub fn flags(&self) -> &'static [&'static str] {
    match self {
      // quiet, force, threaded
      Self::IconCache => &["-qtf"],
      Self::DesktopDatabase => &["-q"],
      Self::Schemas => &[],
    }
  }

  /// Directory the tool operates on, below the data directory.
  pub fn target(&self, datadir: &Path) -> PathBuf {
    let segments: &[&str] = match self {
      Self::IconCache => &HICOLOR_ICONS_DIR,
      Self::DesktopDatabase => &APPLICATIONS_DIR,
      Self::Schemas => &SCHEMAS_DIR,
    };
    segments.iter().fold(datadir.to_path_buf(), |path, segment| path.join(segment))
  }

  /// Progress line printed before the tool runs.
  pub fn progress_message(&self) -> &'static str {
    match self {
      Self::IconCache => "Updating icon cache...",
      Self::DesktopDatabase => "Updating desktop database...",
      Self::Schemas => "Compiling GSettings schemas...",
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::IconCache => "icon-cache",
      Self::DesktopDatabase => "desktop-database",
      Self::Schemas => "schemas",
    }
  }
}

impl fmt::Display for RefreshTool {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A fully resolved tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCommand {
  pub tool: RefreshTool,
  pub program: String,
  pub flags: Vec<String>,
  pub target: PathBuf,
}

impl ToolCommand {
  pub fn new(tool: RefreshTool, platform: PlatformFamily, datadir: &Path) -> Self {
    Self {
      tool,
      program: tool.program(platform).to_string(),
      flags: tool.flags().iter().map(ToString::to_string).collect(),
      target: tool.target(datadir),
    }
  }

  /// Arguments in the order they are handed to the program.
  pub fn args(&self) -> Vec<OsString> {
    self
      .flags
      .iter()
      .map(OsString::from)
      .chain(std::iter::once(self.target.clone().into_os_string()))
      .collect()
  }

  /// Shell-style rendering used for logs and dry runs.
  pub fn command_line(&self) -> String {
    let mut parts = vec![self.program.clone()];
    parts.extend(self.flags.iter().cloned());
    parts.push(self.target.to_string_lossy().into_owned());
    parts.join(" ")
  }
}

impl fmt::Display for ToolCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.command_line())
  }
}
