//! CLI entrypoint module structure.
use std::io;

use anyhow::Result;
use tracing::debug;

use crate::{
    commands::{LinePrompt, Session, SystemLauncher},
    registry::RegistryStore,
    settings::Settings,
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::{ChooseArgs, CliCommand, ParsedCommand, SwitcherArgs};
pub use exit::CliExit;
pub use profile::{resolve_config_home, resolve_registry_path, LaunchProfile};

/// Execute one command against the real stdin, stdout and editor.
pub fn execute_cli_command(profile: &LaunchProfile, command: CliCommand) -> Result<()> {
    debug!(
        target: "nvcs::cli",
        config_home = %profile.config_home.display(),
        registry = %profile.registry_path.display(),
        settings = %profile.settings_path.display(),
        "Resolved launch profile"
    );

    let settings = Settings::load_from_path(profile.settings_path.clone())?;
    let store = RegistryStore::new(profile.registry_path.clone());
    let mut prompt = LinePrompt::stdin();
    let mut launcher = SystemLauncher;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    Session {
        store: &store,
        settings: &settings,
        config_home: &profile.config_home,
        prompt: &mut prompt,
        launcher: &mut launcher,
        out: &mut out,
    }
    .execute(command)
}
