use std::io::Write;

use anyhow::Result;
use tracing::info;

use super::Session;
use crate::registry::Registry;

const NAME_QUESTION: &str = "Enter configuration name: ";
const FOLDER_QUESTION: &str = "Enter config folder name in .config (e.g., nvim-lazyvim): ";

/// Ask for a name and a folder, then insert (or overwrite) and persist.
///
/// Neither answer is validated; the folder is not required to exist.
pub(super) fn run(session: &mut Session<'_>, registry: &mut Registry) -> Result<()> {
    let name = session.ask(NAME_QUESTION)?;
    let folder = session.ask(FOLDER_QUESTION)?;

    let overwritten = registry.insert(name.clone(), folder.clone());
    session.store.save(registry)?;
    info!(
        target: "nvcs::commands",
        name = %name,
        folder = %folder,
        overwritten,
        "Configuration added"
    );

    writeln!(session.out, "Configuration '{name}' added.")?;
    Ok(())
}
