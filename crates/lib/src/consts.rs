//! Names and paths shared across the crate.

/// Environment variable Meson sets to the configured install prefix.
pub const PREFIX_VAR: &str = "MESON_INSTALL_PREFIX";

/// Environment variable set when files are staged under a package root.
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Prefix used when `MESON_INSTALL_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "/usr/local";

/// Data directory name below the install prefix.
pub const DATA_DIR_NAME: &str = "share";

/// Icon theme directory, relative to the data directory.
pub const HICOLOR_ICONS_DIR: [&str; 2] = ["icons", "hicolor"];

/// Desktop entry directory, relative to the data directory.
pub const APPLICATIONS_DIR: [&str; 1] = ["applications"];

/// GSettings schema directory, relative to the data directory.
pub const SCHEMAS_DIR: [&str; 2] = ["glib-2.0", "schemas"];
