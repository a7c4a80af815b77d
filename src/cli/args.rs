//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_home, resolve_registry_path, LaunchProfile};
use crate::lib::paths::default_settings_path;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    /// No subcommand was given.
    Help,
    Run(LaunchProfile, CliCommand),
}

/// Registry commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Add a new configuration.
    Add,
    /// Remove an existing configuration.
    Remove,
    /// List all available configurations.
    List,
    /// Initialize configurations by scanning the config directory for nvim folders.
    Init,
    /// Choose a configuration and open the target with it.
    Choose(ChooseArgs),
}

/// Arguments for `choose`.
#[derive(Debug, Clone, Args)]
pub struct ChooseArgs {
    /// Target file or directory to open with the chosen configuration.
    pub target: Option<PathBuf>,
    /// Configuration number to use (bypasses selection prompt).
    #[arg(short = 'n', long = "number", allow_negative_numbers = true)]
    pub number: Option<i64>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nvcs",
    author,
    version,
    about = "Neovim Config Switcher - A tool to manage multiple Neovim configurations",
    long_about = None
)]
pub struct SwitcherArgs {
    /// Directory holding editor config folders (overrides NVCS_CONFIG_HOME / XDG_CONFIG_HOME).
    #[arg(long = "config-home", global = true)]
    pub config_home_override: Option<PathBuf>,
    /// Path to configs.json (overrides NVCS_REGISTRY_PATH).
    #[arg(long = "registry", global = true)]
    pub registry_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl SwitcherArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<LaunchProfile> {
        let config_home = resolve_config_home(self.config_home_override.clone())?;
        let registry_path = resolve_registry_path(self.registry_override.clone(), &config_home)?;
        let settings_path = default_settings_path(&config_home);

        Ok(LaunchProfile {
            config_home,
            registry_path,
            settings_path,
        })
    }

    /// Parse CLI args into a command to run, or the help fallback.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let Some(command) = self.command.clone() else {
            return Ok(ParsedCommand::Help);
        };
        Ok(ParsedCommand::Run(self.build()?, command))
    }
}
