//! Telemetry initialization and editor launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs on stderr.
///
/// Defaults to `warn` so normal command output on stdout stays readable;
/// set `RUST_LOG=nvcs=debug` for the full trail.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of an editor session.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Start a launch span for the chosen configuration folder.
    pub fn start(program: &str, app_name: &str) -> Self {
        let span = info_span!(
            target: "nvcs::launch",
            "editor_session",
            program,
            app_name
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "nvcs::launch",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Editor session ended"
        );
    }
}
