use tracing::{debug, info};

use super::{Settings, SETTINGS_ENV_PREFIX};

pub fn log_load_started(path: &std::path::Path) {
    debug!(
        target: "nvcs::settings",
        path = %path.display(),
        env_prefix = SETTINGS_ENV_PREFIX,
        exists = path.exists(),
        "Starting settings load"
    );
}

pub fn log_loaded(settings: &Settings) {
    info!(
        target: "nvcs::settings",
        path = %settings.source_path.display(),
        editor = %settings.editor.display(),
        scan_pattern = %settings.scan_pattern,
        "Settings loaded"
    );
}
