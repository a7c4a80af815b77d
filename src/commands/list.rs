use std::io::{self, Write};

use anyhow::Result;

use super::Session;
use crate::registry::Registry;

/// Print `<n>. <name>: <folder>` per entry, numbered from 1 in registry order.
pub fn write_listing(out: &mut dyn Write, registry: &Registry) -> io::Result<()> {
    if registry.is_empty() {
        return writeln!(out, "No configurations found.");
    }
    for (position, entry) in registry.iter().enumerate() {
        writeln!(out, "{}. {}: {}", position + 1, entry.name, entry.folder)?;
    }
    Ok(())
}

pub(super) fn run(session: &mut Session<'_>, registry: &Registry) -> Result<()> {
    write_listing(session.out, registry)?;
    Ok(())
}
