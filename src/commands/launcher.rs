use tracing::{error, info};

use crate::lib::{
    editor::{build_editor_command, EditorLaunchRequest},
    errors::LaunchError,
    telemetry::LaunchSpan,
};

/// Runs the editor for a chosen configuration.
pub trait EditorLauncher {
    /// Launch and wait; a non-zero exit is an error.
    fn launch(&mut self, request: EditorLaunchRequest<'_>) -> Result<(), LaunchError>;
}

/// Launcher that spawns a real child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl EditorLauncher for SystemLauncher {
    fn launch(&mut self, request: EditorLaunchRequest<'_>) -> Result<(), LaunchError> {
        let program = request.program.display().to_string();
        let app_name = request
            .env_overrides
            .get(crate::lib::editor::NVIM_APPNAME_ENV)
            .cloned()
            .unwrap_or_default();
        let span = LaunchSpan::start(&program, &app_name);

        info!(
            target: "nvcs::launch",
            program = %program,
            target_path = ?request.target,
            app_name = %app_name,
            "Launching editor"
        );

        let mut command = build_editor_command(request);
        let status = match command.status() {
            Ok(status) => status,
            Err(source) => {
                error!(
                    target: "nvcs::launch",
                    program = %program,
                    reason = %source,
                    "Failed to spawn editor"
                );
                span.finish("spawn_failed", None);
                return Err(LaunchError::Spawn { program, source });
            }
        };

        if status.success() {
            span.finish("succeeded", status.code());
            Ok(())
        } else {
            span.finish("failed", status.code());
            Err(LaunchError::ExitStatus {
                program,
                code: status.code(),
            })
        }
    }
}
