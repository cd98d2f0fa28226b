// ═══════════════════════════════════════════════════════════════════════════════
// 📦 logging.rs - Tracing Setup
// ═══════════════════════════════════════════════════════════════════════════════
// The terminal is taken over by the TUI, so logs go to a file.
// Filter with PIPE_TUI_LOG (e.g. PIPE_TUI_LOG=debug), default "info".
// ═══════════════════════════════════════════════════════════════════════════════

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ViewerError};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PIPE_TUI_LOG";

/// Install the global subscriber writing to `path` (appending)
/// تثبيت المسجل العام للكتابة إلى ملف
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ViewerError::io(path, e))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| ViewerError::Logging(e.to_string()))
}
