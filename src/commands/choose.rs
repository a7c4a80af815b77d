use std::io::Write;

use anyhow::{anyhow, Result};
use tracing::debug;

use super::{list::write_listing, Session};
use crate::{
    cli::ChooseArgs,
    lib::editor::{app_name_overrides, EditorLaunchRequest},
    registry::Registry,
};

const CHOOSE_QUESTION: &str = "Choose configuration by number: ";

/// Pick an entry (from `-n` or a prompt) and open the target under it.
pub(super) fn run(session: &mut Session<'_>, registry: &Registry, args: ChooseArgs) -> Result<()> {
    let Some(target) = args.target else {
        writeln!(session.out, "Please provide a target file or directory.")?;
        return Ok(());
    };

    if registry.is_empty() {
        writeln!(session.out, "No configurations available.")?;
        return Ok(());
    }

    let Some(index) = select(session, registry, args.number)? else {
        return Ok(());
    };
    let entry = registry
        .get(index)
        .ok_or_else(|| anyhow!("selected position {index} is not in the registry"))?;

    let overrides = app_name_overrides(&entry.folder);
    session.launcher.launch(EditorLaunchRequest {
        program: &session.settings.editor,
        target: target.as_os_str(),
        env_overrides: &overrides,
    })?;
    Ok(())
}

/// Resolve the 0-based position to launch, or `None` after reporting an invalid choice.
fn select(
    session: &mut Session<'_>,
    registry: &Registry,
    number: Option<i64>,
) -> Result<Option<usize>> {
    if let Some(number) = number {
        return match registry.select(number) {
            Ok(index) => Ok(Some(index)),
            Err(err) => {
                debug!(target: "nvcs::commands", reason = %err, "Rejected --number");
                writeln!(
                    session.out,
                    "Invalid configuration number. Please choose between 1 and {}",
                    registry.len()
                )?;
                write_listing(session.out, registry)?;
                Ok(None)
            }
        };
    }

    write_listing(session.out, registry)?;
    let answer = session.ask(CHOOSE_QUESTION)?;
    match registry.select_input(&answer) {
        Ok(index) => Ok(Some(index)),
        Err(err) => {
            debug!(target: "nvcs::commands", reason = %err, "Rejected selection");
            writeln!(session.out, "Invalid selection.")?;
            Ok(None)
        }
    }
}
