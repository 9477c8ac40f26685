//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "veritas.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/veritas/logs/` (platform data dir).
/// Nothing is written to stdout: the TUI owns the terminal and headless mode
/// owns stdout. Log level is controlled by the `VERITAS_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// VERITAS_LOG=debug veritas photo.jpg
/// VERITAS_LOG=veritas_detect=trace veritas --headless photo.jpg
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("VERITAS_LOG").unwrap_or_else(|_| {
        EnvFilter::new("veritas=info,veritas_app=info,veritas_detect=info,veritas_tui=info,warn")
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
    tracing::info!("Veritas starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("veritas").join("logs")
}

/// Get the log file path (the appender adds a date suffix per day)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}
