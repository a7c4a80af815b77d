use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating `settings.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the settings sources.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize the merged sources into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Errors raised while reading or writing `configs.json`.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse registry file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Registry file {path} must contain a JSON object")]
    NotAnObject { path: PathBuf },
    #[error("Registry file {path} maps `{name}` to a non-string value")]
    NonStringValue { path: PathBuf, name: String },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write registry file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize registry for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while scanning the configuration home during `init`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A numbered choice that does not point at a registry entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection {value} is outside 1..={len}")]
    OutOfRange { value: i64, len: usize },
    #[error("`{input}` is not a number")]
    NotANumber { input: String },
    #[error("no configurations to choose from")]
    Empty,
}

/// Failures while running the editor child process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited abnormally (exit={code:?})")]
    ExitStatus { program: String, code: Option<i32> },
}

/// The configuration home could not be derived from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("NVCS_CONFIG_HOME, XDG_CONFIG_HOME and HOME are all unset")]
    NoConfigHome,
}
