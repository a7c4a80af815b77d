//! LaunchProfile and config home / registry path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::lib::paths::{default_registry_path, resolve_config_home_from};

const NVCS_CONFIG_HOME_ENV: &str = "NVCS_CONFIG_HOME";
const NVCS_REGISTRY_PATH_ENV: &str = "NVCS_REGISTRY_PATH";
const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
const HOME_ENV: &str = "HOME";

/// Resolved paths for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    /// Directory whose subfolders are editor configurations.
    pub config_home: PathBuf,
    pub registry_path: PathBuf,
    pub settings_path: PathBuf,
}

/// Resolve the config home in the order: CLI override → NVCS_CONFIG_HOME → XDG_CONFIG_HOME → HOME.
pub fn resolve_config_home(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path,
        None => resolve_config_home_from(
            env::var_os(NVCS_CONFIG_HOME_ENV),
            env::var_os(XDG_CONFIG_HOME_ENV),
            env::var_os(HOME_ENV),
        )?,
    };
    absolutize(path)
}

/// Resolve the registry file in the order: CLI override → NVCS_REGISTRY_PATH → default.
pub fn resolve_registry_path(override_path: Option<PathBuf>, config_home: &Path) -> Result<PathBuf> {
    let path = override_path
        .or_else(|| {
            env::var_os(NVCS_REGISTRY_PATH_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| default_registry_path(config_home));
    absolutize(path)
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
