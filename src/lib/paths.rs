//! Path helpers for the configuration home and the files nvcs keeps under it.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::lib::errors::PathError;

/// Directory under the configuration home that holds nvcs state.
pub const STATE_DIR_NAME: &str = "nv-config";
/// Registry file name inside [`STATE_DIR_NAME`].
pub const REGISTRY_FILE_NAME: &str = "configs.json";
/// Optional settings file name inside [`STATE_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve the configuration home from explicit environment values.
///
/// Resolution order:
/// 1. `NVCS_CONFIG_HOME` when set and non-empty.
/// 2. `XDG_CONFIG_HOME` when set to an absolute path.
/// 3. `$HOME/.config` otherwise.
pub fn resolve_config_home_from(
    nvcs_home: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, PathError> {
    if let Some(value) = nvcs_home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    if let Some(xdg) = xdg_config_home.map(PathBuf::from) {
        if is_nonempty_absolute(&xdg) {
            return Ok(xdg);
        }
    }

    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home).join(".config"));
    }

    Err(PathError::NoConfigHome)
}

/// `<config_home>/nv-config/configs.json`
pub fn default_registry_path(config_home: &Path) -> PathBuf {
    config_home.join(STATE_DIR_NAME).join(REGISTRY_FILE_NAME)
}

/// `<config_home>/nv-config/settings.toml`
pub fn default_settings_path(config_home: &Path) -> PathBuf {
    config_home.join(STATE_DIR_NAME).join(SETTINGS_FILE_NAME)
}
