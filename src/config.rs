// ═══════════════════════════════════════════════════════════════════════════════
// 📦 config.rs - Viewer Configuration
// ═══════════════════════════════════════════════════════════════════════════════
// Defaults, overridden by an optional TOML file, overridden by CLI flags.
//
// Example pipe_tui.toml:
//   data_dir = "Macro Power Data/Macro Power Data"
//   window_choices = [1000, 5000, 10000, 15000, 20000]
//   default_window = 5000
//   log_file = "pipe_tui.log"
// ═══════════════════════════════════════════════════════════════════════════════

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, ViewerError};

/// Dataset folder shipped with the repository
pub const DEFAULT_DATA_DIR: &str = "Macro Power Data/Macro Power Data";

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pipe_tui.toml";

pub const DEFAULT_LOG_FILE: &str = "pipe_tui.log";

/// Selectable sample counts / أعداد العينات القابلة للاختيار
pub const DEFAULT_WINDOW_CHOICES: [usize; 5] = [1_000, 5_000, 10_000, 15_000, 20_000];

/// Viewer settings
/// إعدادات العارض
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Directory scanned by the directory source
    pub data_dir: PathBuf,

    /// Window sizes offered in the selector, ascending
    pub window_choices: Vec<usize>,

    /// Initially selected window size
    pub default_window: usize,

    /// Where tracing output goes (the terminal belongs to the TUI)
    pub log_file: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            window_choices: DEFAULT_WINDOW_CHOICES.to_vec(),
            default_window: DEFAULT_WINDOW_CHOICES[0],
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl ViewerConfig {
    /// Load from `path`, or from `pipe_tui.toml` if present, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ViewerError::io(path, e))?;
        let config = Self::from_toml(&text).map_err(|message| ViewerError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn from_toml(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        window: Option<usize>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(window) = window {
            self.default_window = window;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Check window sizes and normalise the choice list
    ///
    /// Zero-sized windows are rejected. Choices are sorted and deduplicated,
    /// and a default window missing from the list is inserted into it.
    pub fn validated(mut self) -> Result<Self> {
        if self.default_window == 0 {
            return Err(ViewerError::InvalidWindow(0));
        }
        if self.window_choices.contains(&0) {
            return Err(ViewerError::InvalidWindow(0));
        }

        self.window_choices.push(self.default_window);
        self.window_choices.sort_unstable();
        self.window_choices.dedup();

        Ok(self)
    }

    /// Index of the default window in the choice list
    pub fn default_window_index(&self) -> usize {
        self.window_choices
            .iter()
            .position(|&w| w == self.default_window)
            .unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
