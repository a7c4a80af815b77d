use std::io::Write;

use anyhow::Result;
use tracing::{info, warn};

use super::Session;
use crate::{lib::fs::list_subdirectories, registry::Registry};

/// Register every folder of the configuration home whose name contains the
/// scan pattern (case-insensitive), mapping it to itself.
///
/// Scan and save failures are printed and end this command only; the file is
/// rewritten only when at least one folder matched.
pub(super) fn run(session: &mut Session<'_>, registry: &mut Registry) -> Result<()> {
    writeln!(session.out, "Starting initialization...")?;
    let config_home = session.config_home;
    writeln!(
        session.out,
        "Searching in directory: {}",
        config_home.display()
    )?;

    if let Err(err) = scan_and_register(session, registry) {
        warn!(
            target: "nvcs::init",
            config_home = %config_home.display(),
            reason = %err,
            "Initialization failed"
        );
        writeln!(session.out, "Error during initialization: {err}")?;
    }
    Ok(())
}

fn scan_and_register(session: &mut Session<'_>, registry: &mut Registry) -> Result<()> {
    let config_home = session.config_home;
    let pattern = session.settings.scan_pattern.to_lowercase();

    let folders = list_subdirectories(config_home)?;
    writeln!(session.out, "Found {} folders to check", folders.len())?;

    let mut found = 0usize;
    for folder in folders {
        writeln!(session.out, "Checking folder: {folder}")?;
        if folder.to_lowercase().contains(&pattern) {
            registry.insert(folder.clone(), folder.clone());
            writeln!(session.out, "Configuration '{folder}' added.")?;
            found += 1;
        }
    }

    if found == 0 {
        writeln!(
            session.out,
            "No Neovim configurations found in {} directory.",
            config_home.display()
        )?;
        return Ok(());
    }

    session.store.save(registry)?;
    info!(
        target: "nvcs::init",
        config_home = %config_home.display(),
        found,
        "Registered configurations from scan"
    );
    writeln!(session.out, "Configurations saved successfully.")?;
    Ok(())
}
