use std::fmt;

use serde::Serialize;

/// Host classification that decides which tool executables are invoked.
///
/// Only the Windows family ships the desktop tools under different names, so
/// every other host collapses into [`PlatformFamily::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
  Windows,
  Other,
}

impl PlatformFamily {
  /// Detect the family of the running host
  pub fn current() -> Self {
    Self::from_family(std::env::consts::FAMILY)
  }

  /// Classify a `std::env::consts::FAMILY` style identifier
  pub fn from_family(family: &str) -> Self {
    match family {
      "windows" => Self::Windows,
      _ => Self::Other,
    }
  }

  /// Returns the lowercase string identifier for this family
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::Other => "other",
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }
}

impl fmt::Display for PlatformFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn current_matches_compile_target() {
    assert_eq!(PlatformFamily::current().is_windows(), cfg!(windows));
  }

  #[test]
  fn unix_and_unknown_families_are_other() {
    assert_eq!(PlatformFamily::from_family("unix"), PlatformFamily::Other);
    assert_eq!(PlatformFamily::from_family("wasm"), PlatformFamily::Other);
    assert_eq!(PlatformFamily::from_family(""), PlatformFamily::Other);
  }

  #[test]
  fn windows_family_is_detected() {
    assert_eq!(PlatformFamily::from_family("windows"), PlatformFamily::Windows);
    assert_eq!(PlatformFamily::Windows.to_string(), "windows");
  }
}
