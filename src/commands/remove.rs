use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use super::{list::write_listing, Session};
use crate::registry::Registry;

const REMOVE_QUESTION: &str = "Enter number to remove: ";

/// Show the list, ask for a position and delete that entry.
///
/// An invalid answer leaves both the registry and its file untouched.
pub(super) fn run(session: &mut Session<'_>, registry: &mut Registry) -> Result<()> {
    write_listing(session.out, registry)?;
    if registry.is_empty() {
        return Ok(());
    }

    let answer = session.ask(REMOVE_QUESTION)?;
    let removed = registry
        .select_input(&answer)
        .ok()
        .and_then(|index| registry.remove_at(index));
    let Some(removed) = removed else {
        debug!(
            target: "nvcs::commands",
            answer = %answer,
            entries = registry.len(),
            "Rejected removal selection"
        );
        writeln!(session.out, "Invalid selection.")?;
        return Ok(());
    };

    session.store.save(registry)?;
    info!(
        target: "nvcs::commands",
        name = %removed.name,
        folder = %removed.folder,
        "Configuration removed"
    );
    writeln!(session.out, "Configuration '{}' removed.", removed.name)?;
    Ok(())
}
