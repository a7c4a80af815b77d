//! Shared helpers for building the editor command.

use std::{collections::BTreeMap, ffi::OsStr, path::Path, process::Command};

/// Environment variable Neovim reads to pick its config folder.
pub const NVIM_APPNAME_ENV: &str = "NVIM_APPNAME";

pub struct EditorLaunchRequest<'a> {
    pub program: &'a Path,
    pub target: &'a OsStr,
    pub env_overrides: &'a BTreeMap<String, String>,
}

/// Overrides applied on top of the inherited environment for a chosen folder.
pub fn app_name_overrides(folder: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(NVIM_APPNAME_ENV.to_string(), folder.to_string())])
}

/// Build the editor command: the target is the only argument and the
/// overrides are layered over the inherited environment of this process.
pub fn build_editor_command(request: EditorLaunchRequest<'_>) -> Command {
    let mut command = Command::new(request.program);
    for (key, value) in request.env_overrides {
        command.env(key, value);
    }
    command.arg(request.target);
    command
}
