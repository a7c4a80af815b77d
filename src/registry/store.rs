use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use tracing::{debug, error, info};

use super::Registry;
use crate::lib::errors::RegistryError;

const JSON_INDENT: &[u8] = b"    ";

/// Loads and persists the registry at a fixed path.
///
/// There is no locking: concurrent invocations race and the last write wins.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry; a missing file is an empty registry and nothing is created.
    ///
    /// A path that cannot be resolved (for example a regular file where a
    /// parent directory should be) counts as missing too.
    pub fn load(&self) -> Result<Registry, RegistryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound || !self.path.exists() => {
                debug!(
                    target: "nvcs::registry",
                    path = %self.path.display(),
                    reason = %err,
                    "Registry file not found; starting empty"
                );
                return Ok(Registry::new());
            }
            Err(source) => {
                return Err(RegistryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let registry = parse_registry(&self.path, &content).map_err(|err| {
            error!(
                target: "nvcs::registry",
                path = %self.path.display(),
                reason = %err,
                "Failed to parse registry file"
            );
            err
        })?;

        debug!(
            target: "nvcs::registry",
            path = %self.path.display(),
            entries = registry.len(),
            "Registry loaded"
        );
        Ok(registry)
    }

    /// Rewrite the whole file, creating the parent directory if needed.
    pub fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RegistryError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let rendered = render_registry(&self.path, registry)?;
        fs::write(&self.path, rendered).map_err(|source| RegistryError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            target: "nvcs::registry",
            path = %self.path.display(),
            entries = registry.len(),
            "Registry saved"
        );
        Ok(())
    }
}

fn parse_registry(path: &Path, content: &str) -> Result<Registry, RegistryError> {
    let document: Value = serde_json::from_str(content).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(map) = document else {
        return Err(RegistryError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut registry = Registry::new();
    for (name, value) in map {
        let Value::String(folder) = value else {
            return Err(RegistryError::NonStringValue {
                path: path.to_path_buf(),
                name,
            });
        };
        registry.insert(name, folder);
    }
    Ok(registry)
}

/// Render as a 4-space indented JSON object without a trailing newline.
fn render_registry(path: &Path, registry: &Registry) -> Result<Vec<u8>, RegistryError> {
    let map: Map<String, Value> = registry
        .iter()
        .map(|entry| (entry.name.clone(), Value::String(entry.folder.clone())))
        .collect();

    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    map.serialize(&mut serializer)
        .map_err(|source| RegistryError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buffer)
}
