//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "DOCPORT_LOG";

const LOG_FILE_NAME: &str = "docport.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/docport/logs/` so the TUI never
/// interleaves log lines with the rendered frame.
/// Log level is controlled by the `DOCPORT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DOCPORT_LOG=debug docport
/// DOCPORT_LOG=docport_app=trace docport
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for dependencies
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("docport=info,docport_app=info,docport_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("docport starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docport")
        .join("logs")
}

/// Base path of the rolling log; each day's file gets a date suffix
pub fn log_file() -> PathBuf {
    log_directory().join(LOG_FILE_NAME)
}
