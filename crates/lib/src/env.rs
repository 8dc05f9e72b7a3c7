//! Install environment resolution.
//!
//! Meson hands the hook its configuration exclusively through environment
//! variables. They are read once, at startup, into an [`InstallEnv`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::consts::{DATA_DIR_NAME, DEFAULT_PREFIX, DESTDIR_VAR, PREFIX_VAR};

/// Where the install is landing.
///
/// An unset `DESTDIR` and an empty one both mean the live system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "root", rename_all = "lowercase")]
pub enum InstallMode {
  /// Files went straight into the prefix on the running system.
  Live,
  /// Files were staged below this root for later packaging.
  Staged(PathBuf),
}

impl InstallMode {
  pub fn is_staged(&self) -> bool {
    matches!(self, InstallMode::Staged(_))
  }
}

/// Install paths as handed over by the build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallEnv {
  pub prefix: PathBuf,
  #[serde(flatten)]
  pub mode: InstallMode,
}

impl InstallEnv {
  /// Read `MESON_INSTALL_PREFIX` and `DESTDIR` from the process environment.
  pub fn from_env() -> Self {
    Self::from_vars(std::env::var_os(PREFIX_VAR), std::env::var_os(DESTDIR_VAR))
  }

  /// Build from raw variable values.
  ///
  /// An absent prefix resolves to `/usr/local`. A prefix that is set is
  /// taken verbatim, even when empty.
  pub fn from_vars(prefix: Option<OsString>, destdir: Option<OsString>) -> Self {
    let prefix = match prefix {
      Some(p) => PathBuf::from(p),
      None => PathBuf::from(DEFAULT_PREFIX),
    };

    let mode = match destdir {
      Some(root) if !root.is_empty() => InstallMode::Staged(PathBuf::from(root)),
      _ => InstallMode::Live,
    };

    debug!(prefix = %prefix.display(), ?mode, "resolved install environment");

    Self { prefix, mode }
  }

  pub fn prefix(&self) -> &Path {
    &self.prefix
  }

  /// The `share` directory below the prefix.
  pub fn datadir(&self) -> PathBuf {
    self.prefix.join(DATA_DIR_NAME)
  }

  pub fn is_staged(&self) -> bool {
    self.mode.is_staged()
  }
}
