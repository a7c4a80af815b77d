//! Command dispatcher: one registry operation per invocation.
use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::{cli::CliCommand, registry::RegistryStore, settings::Settings};

mod add;
mod choose;
mod init;
pub mod launcher;
mod list;
pub mod prompt;
mod remove;

pub use launcher::{EditorLauncher, SystemLauncher};
pub use list::write_listing;
pub use prompt::{LinePrompt, Prompt};

/// Everything an operation needs, passed explicitly instead of read from globals.
pub struct Session<'a> {
    pub store: &'a RegistryStore,
    pub settings: &'a Settings,
    /// Directory scanned by `init`; registered folders are relative to it.
    pub config_home: &'a Path,
    pub prompt: &'a mut dyn Prompt,
    pub launcher: &'a mut dyn EditorLauncher,
    /// User-facing output (stdout in the binary).
    pub out: &'a mut dyn Write,
}

impl Session<'_> {
    /// Load the registry and run exactly one command against it.
    ///
    /// A malformed registry file aborts before the command runs.
    pub fn execute(&mut self, command: CliCommand) -> Result<()> {
        let mut registry = self.store.load()?;
        debug!(
            target: "nvcs::commands",
            command = ?command,
            entries = registry.len(),
            "Dispatching command"
        );

        match command {
            CliCommand::List => list::run(self, &registry),
            CliCommand::Add => add::run(self, &mut registry),
            CliCommand::Remove => remove::run(self, &mut registry),
            CliCommand::Init => {
                init::run(self, &mut registry)?;
                list::run(self, &registry)
            }
            CliCommand::Choose(args) => choose::run(self, &registry, args),
        }
    }

    /// Print `question` without a newline and wait for one answer line.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        self.prompt
            .read_answer()?
            .ok_or_else(|| anyhow!("input closed while waiting for an answer to `{question}`"))
    }
}
