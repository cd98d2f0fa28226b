// ═══════════════════════════════════════════════════════════════════════════════
// 📦 error.rs - Viewer Error Types
// ═══════════════════════════════════════════════════════════════════════════════
// One error enum for the whole viewer. Read errors are never recovered
// inside the reader; they travel up to the app which shows them in the
// status line.
// ═══════════════════════════════════════════════════════════════════════════════

use std::path::PathBuf;

use thiserror::Error;

/// All errors produced by the viewer
/// جميع الأخطاء التي ينتجها العارض
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file} line {line}: missing column {column}")]
    MissingColumn {
        file: String,
        line: usize,
        column: usize,
    },

    #[error("{file} line {line}: column {column} is not numeric ({value:?})")]
    NonNumeric {
        file: String,
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid window size {0}: must be a positive number of samples")]
    InvalidWindow(usize),

    #[error("Rejected upload {0}: only .csv files are accepted")]
    NotCsv(String),

    #[error("{0} does not accept uploads")]
    UploadUnsupported(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl ViewerError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ViewerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
