//! Ordered name → folder registry of Neovim configurations.

use crate::lib::errors::SelectionError;

pub mod store;

pub use store::RegistryStore;

/// One named configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    /// Folder name relative to the configuration home (the `NVIM_APPNAME` value).
    pub folder: String,
}

/// Insertion-ordered mapping with unique names.
///
/// Positions shown to the user are 1-based and follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Entry at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
        self.entries.get(index)
    }

    /// Folder registered under `name`.
    pub fn folder_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.folder.as_str())
    }

    /// Insert or overwrite `name`. An overwritten entry keeps its position.
    ///
    /// Returns true when an existing entry was overwritten.
    pub fn insert(&mut self, name: impl Into<String>, folder: impl Into<String>) -> bool {
        let name = name.into();
        let folder = folder.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => {
                existing.folder = folder;
                true
            }
            None => {
                self.entries.push(RegistryEntry { name, folder });
                false
            }
        }
    }

    /// Remove the entry at a 0-based position.
    pub fn remove_at(&mut self, index: usize) -> Option<RegistryEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Resolve a 1-based choice to its 0-based position.
    pub fn select(&self, choice: i64) -> Result<usize, SelectionError> {
        if self.entries.is_empty() {
            return Err(SelectionError::Empty);
        }
        let len = self.entries.len();
        usize::try_from(choice)
            .ok()
            .filter(|value| (1..=len).contains(value))
            .map(|value| value - 1)
            .ok_or(SelectionError::OutOfRange { value: choice, len })
    }

    /// Parse a typed answer and resolve it like [`Registry::select`].
    pub fn select_input(&self, input: &str) -> Result<usize, SelectionError> {
        let trimmed = input.trim();
        let choice = trimmed
            .parse::<i64>()
            .map_err(|_| SelectionError::NotANumber {
                input: trimmed.to_string(),
            })?;
        self.select(choice)
    }
}

impl<N: Into<String>, F: Into<String>> FromIterator<(N, F)> for Registry {
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for (name, folder) in iter {
            registry.insert(name, folder);
        }
        registry
    }
}
