//! Filesystem helpers for scanning the configuration home.

use std::{fs, path::Path};

use tracing::debug;

use crate::lib::errors::ScanError;

/// List the names of the immediate subdirectories of `dir`, sorted.
///
/// Symlinks are followed, so a linked config folder counts as a directory.
/// Plain files and names that are not valid UTF-8 are skipped.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(
                target: "nvcs::init",
                name = ?raw,
                "Skipping folder with a non UTF-8 name"
            ),
        }
    }

    names.sort();
    Ok(names)
}
