//! Load and validate nvcs settings.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod telemetry;

/// Prefix for environment overrides (`NVCS_EDITOR`, `NVCS_SCAN_PATTERN`).
pub const SETTINGS_ENV_PREFIX: &str = "NVCS";
pub const DEFAULT_EDITOR: &str = "nvim";
pub const DEFAULT_SCAN_PATTERN: &str = "nvim";

/// Validated settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Executable spawned by `choose`.
    pub editor: PathBuf,
    /// Case-insensitive substring `init` looks for in folder names.
    pub scan_pattern: String,
    pub source_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    editor: Option<String>,
    scan_pattern: Option<String>,
}

impl Settings {
    /// Built-in defaults, used when neither the file nor the environment says otherwise.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            editor: PathBuf::from(DEFAULT_EDITOR),
            scan_pattern: DEFAULT_SCAN_PATTERN.to_string(),
            source_path,
        }
    }

    /// Load `settings.toml` (optional) layered with `NVCS_*` environment variables.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let environment = config::Environment::with_prefix(SETTINGS_ENV_PREFIX);
        Self::load_with_environment(path, environment)
    }

    fn load_with_environment(
        path: PathBuf,
        environment: config::Environment,
    ) -> Result<Self, ConfigError> {
        telemetry::log_load_started(&path);

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(false))
            .add_source(environment);
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "nvcs::settings",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawSettings = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "nvcs::settings",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = Self::from_raw(raw, path)?;
        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(raw: RawSettings, path: PathBuf) -> Result<Self, ConfigError> {
        let mut settings = Self::defaults(path);

        if let Some(editor) = raw.editor {
            let editor = editor.trim();
            if editor.is_empty() {
                return Err(ConfigError::InvalidField {
                    path: settings.source_path,
                    field: "editor",
                    message: "must not be blank".into(),
                });
            }
            settings.editor = PathBuf::from(editor);
        }

        if let Some(pattern) = raw.scan_pattern {
            if pattern.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    path: settings.source_path,
                    field: "scan_pattern",
                    message: "must not be blank".into(),
                });
            }
            settings.scan_pattern = pattern;
        }

        Ok(settings)
    }
}
