// ═══════════════════════════════════════════════════════════════════════════════
// 📦 source.rs - Measurement File Sources
// ═══════════════════════════════════════════════════════════════════════════════
// Where the CSV files come from. Discovery and reading only need two
// capabilities: list the file names, and open one by name.
// - DirectorySource: a folder on disk (the dataset directory)
// - UploadSource:    a private temp folder filled through the file dialog,
//                    deleted when the session ends
// ═══════════════════════════════════════════════════════════════════════════════

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::error::{Result, ViewerError};

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Source Trait / واجهة المصدر
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability set shared by every file source
/// مجموعة القدرات المشتركة بين مصادر الملفات
pub trait FileSource {
    /// Names of the regular files currently available
    fn list_names(&self) -> Result<Vec<String>>;

    /// Open a file by name for reading. The handle is closed on drop.
    fn open(&self, name: &str) -> Result<Box<dyn Read>>;

    /// Human-readable description for the status panel
    fn describe(&self) -> String;

    /// Add files picked by the user. Returns how many were stored.
    fn ingest(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let _ = paths;
        Err(ViewerError::UploadUnsupported(self.describe()))
    }

    fn accepts_uploads(&self) -> bool {
        false
    }
}

/// List the regular file names of a directory
fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ViewerError::io(dir, e))?;
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ViewerError::io(dir, e))?;
        let is_file = entry
            .file_type()
            .map(|t| t.is_file())
            .map_err(|e| ViewerError::io(entry.path(), e))?;
        if !is_file {
            continue;
        }
        // Non UTF-8 names can never match the pairing pattern
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

fn open_in(dir: &Path, name: &str) -> Result<Box<dyn Read>> {
    let path = dir.join(name);
    let file = File::open(&path).map_err(|e| ViewerError::io(&path, e))?;
    Ok(Box::new(file))
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Directory Source / مصدر المجلد
// ═══════════════════════════════════════════════════════════════════════════════

/// Files in a local directory
/// ملفات في مجلد محلي
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSource for DirectorySource {
    fn list_names(&self) -> Result<Vec<String>> {
        let names = list_dir(&self.dir)?;
        debug!("{} files in {}", names.len(), self.dir.display());
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read>> {
        open_in(&self.dir, name)
    }

    fn describe(&self) -> String {
        format!("📁 {}", self.dir.display())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Upload Source / مصدر الرفع
// ═══════════════════════════════════════════════════════════════════════════════

/// Session-private storage for uploaded files
/// تخزين خاص بالجلسة للملفات المرفوعة
///
/// The temp directory is removed when the source is dropped.
pub struct UploadSource {
    dir: TempDir,
}

impl UploadSource {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("pipe_tui_upload_")
            .tempdir()
            .map_err(|e| ViewerError::io(std::env::temp_dir(), e))?;
        info!("Upload session directory: {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl FileSource for UploadSource {
    fn list_names(&self) -> Result<Vec<String>> {
        list_dir(self.dir.path())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read>> {
        open_in(self.dir.path(), name)
    }

    fn describe(&self) -> String {
        format!("📤 Uploads ({})", self.path().display())
    }

    /// Copy picked CSV files into the session directory
    ///
    /// All names are checked before anything is copied. A file with the
    /// same name as an earlier upload replaces it.
    fn ingest(&mut self, paths: &[PathBuf]) -> Result<usize> {
        let mut named = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| ViewerError::NotCsv(path.display().to_string()))?;
            let is_csv = Path::new(name)
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if !is_csv {
                return Err(ViewerError::NotCsv(name.to_string()));
            }
            named.push((path, name));
        }

        for (path, name) in &named {
            let target = self.dir.path().join(name);
            fs::copy(path, &target).map_err(|e| ViewerError::io(*path, e))?;
            debug!("Uploaded {} -> {}", path.display(), target.display());
        }

        info!("Ingested {} uploaded file(s)", named.len());
        Ok(named.len())
    }

    fn accepts_uploads(&self) -> bool {
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
