// ═══════════════════════════════════════════════════════════════════════════════
// 📦 app.rs - Application Logic
// ═══════════════════════════════════════════════════════════════════════════════
// This module contains the viewer logic and event handling.
// Features:
// - Pair discovery against the injected file source
// - Central window load on every selection change
// - Keyboard input handling
// - Upload of more files in upload sessions
// ═══════════════════════════════════════════════════════════════════════════════

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{error, info, warn};

use crate::error::{Result, ViewerError};
use crate::pairing::PairMatcher;
use crate::source::FileSource;
use crate::state::{PairView, ViewerState};
use crate::window::read_pair_window;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Application Configuration / إعدادات التطبيق
// ═══════════════════════════════════════════════════════════════════════════════

/// Tick rate for the event loop in milliseconds
/// معدل التحديث لحلقة الأحداث بالميلي ثانية
const TICK_RATE_MS: u64 = 50;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Application Structure / هيكل التطبيق
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application structure
/// هيكل التطبيق الرئيسي
pub struct App {
    /// Where the CSV files come from / مصدر ملفات CSV
    source: Box<dyn FileSource>,

    /// Filename pattern matcher / مطابق أسماء الملفات
    matcher: PairMatcher,

    /// Viewer state / حالة العارض
    pub state: ViewerState,
}

impl App {
    /// Create a new application instance
    /// إنشاء مثيل تطبيق جديد
    pub fn new(source: Box<dyn FileSource>, window_choices: Vec<usize>, window_index: usize) -> Self {
        let mut state = ViewerState::new(source.describe(), window_choices, window_index);
        state.uploads_enabled = source.accepts_uploads();

        Self {
            source,
            matcher: PairMatcher::new(),
            state,
        }
    }

    /// Rescan the source and load the selected pair
    /// إعادة فحص المصدر وتحميل الزوج المختار
    pub fn refresh(&mut self) {
        if let Err(e) = self.rescan() {
            error!("Scan failed: {}", e);
            self.state.set_pairs(Vec::new());
            self.state.status_message = format!("❌ {}", e);
            return;
        }
        self.load_selected();
    }

    /// Rebuild the pair list from the current file set
    fn rescan(&mut self) -> Result<()> {
        let names = self.source.list_names()?;
        let pairs = self.matcher.discover(&names);
        info!("{} pair(s) among {} file(s)", pairs.len(), names.len());
        self.state.set_pairs(pairs);
        Ok(())
    }

    /// Read the central window of the selected pair and rebuild the charts
    /// قراءة النافذة المركزية للزوج المختار وإعادة بناء الرسوم
    pub fn load_selected(&mut self) {
        let Some(pair) = self.state.selected_pair().cloned() else {
            self.state.status_message = "⚠️ No valid file pairs found".to_string();
            return;
        };
        let requested = self.state.requested_window();

        match read_pair_window(self.source.as_ref(), &pair, requested) {
            Ok(data) => {
                let view = PairView::from_window(&pair.key, data);
                info!(
                    "Loaded {} rows {}..{} of {}",
                    pair.key,
                    view.window.start,
                    view.window.end(),
                    view.total_rows
                );
                self.state.status_message = format!(
                    "✅ {}: {} samples @ {} ({})",
                    pair.key,
                    view.window.count,
                    view.window.start,
                    view.loaded_at.format("%H:%M:%S")
                );
                self.state.view = Some(view);
            }
            Err(e) => {
                error!("Failed to load {}: {}", pair.key, e);
                self.state.clear_view();
                self.state.status_message = format!("❌ {}", e);
            }
        }
    }

    /// Handle keyboard and other events
    /// معالجة لوحة المفاتيح والأحداث الأخرى
    ///
    /// Returns true if should quit / يرجع true إذا يجب الخروج
    pub fn handle_events(&mut self) -> std::io::Result<bool> {
        // Poll for events with timeout / استطلاع الأحداث مع مهلة
        if event::poll(Duration::from_millis(TICK_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events / معالجة أحداث الضغط على المفاتيح فقط
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }

        Ok(self.state.should_quit)
    }

    /// Handle a single key press
    /// معالجة ضغطة مفتاح واحدة
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            // Q / Esc - Quit / الخروج
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state.should_quit = true;
            }

            // ↑↓ - Select pair / اختيار الزوج
            KeyCode::Up => {
                if self.state.move_selection(-1) {
                    self.load_selected();
                }
            }
            KeyCode::Down => {
                if self.state.move_selection(1) {
                    self.load_selected();
                }
            }

            // ←→ - Window size / حجم النافذة
            KeyCode::Left => {
                if self.state.move_window(-1) {
                    self.load_selected();
                }
            }
            KeyCode::Right => {
                if self.state.move_window(1) {
                    self.load_selected();
                }
            }

            // Enter / L - Reload selection / إعادة التحميل
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('L') => {
                self.load_selected();
            }

            // R - Rescan source / إعادة الفحص
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh();
            }

            // U - Upload more files / رفع ملفات إضافية
            KeyCode::Char('u') | KeyCode::Char('U') => {
                if self.state.uploads_enabled {
                    self.upload_from_dialog();
                }
            }

            _ => {}
        }
    }

    /// Open the file dialog and add the picked files to the source
    /// فتح نافذة الملفات وإضافة الملفات المختارة
    fn upload_from_dialog(&mut self) {
        self.state.status_message = "📂 Opening file dialog...".to_string();

        let result = pick_csv_files().and_then(|paths| self.upload(&paths));
        match result {
            Ok(count) => {
                self.refresh();
                self.state.status_message = format!(
                    "✅ Uploaded {} file(s), {} pair(s) available",
                    count,
                    self.state.pairs.len()
                );
            }
            Err(ViewerError::NoFileSelected) => {
                self.state.status_message = "No file selected".to_string();
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                self.state.status_message = format!("❌ {}", e);
            }
        }
    }

    /// Add files to the source without rescanning
    pub fn upload(&mut self, paths: &[PathBuf]) -> Result<usize> {
        self.source.ingest(paths)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Helper Functions / دوال مساعدة
// ═══════════════════════════════════════════════════════════════════════════════

/// Open a native multi-file dialog for measurement CSVs (uses rfd crate)
/// فتح نافذة اختيار ملفات متعددة (يستخدم مكتبة rfd)
pub fn pick_csv_files() -> Result<Vec<PathBuf>> {
    let files = rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .set_title("Select vibration (M####L.csv) and power (M####L_power.csv) files")
        .pick_files();

    match files {
        Some(paths) if !paths.is_empty() => Ok(paths),
        _ => Err(ViewerError::NoFileSelected),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DirectorySource, UploadSource};
    use crate::window::Window;
    use std::fs;
    use std::path::Path;

    const CHOICES: [usize; 3] = [2, 4, 100];

    fn write_pair(dir: &Path, key: &str, rows: usize) {
        let vibration: String = (0..rows).map(|i| format!("t,{},0,0\n", i)).collect();
        let power: String = (0..rows).map(|i| format!("t,{}\n", i * 10)).collect();
        fs::write(dir.join(format!("{}.csv", key)), vibration).unwrap();
        fs::write(dir.join(format!("{}_power.csv", key)), power).unwrap();
    }

    fn directory_app(dir: &Path) -> App {
        App::new(Box::new(DirectorySource::new(dir)), CHOICES.to_vec(), 0)
    }

    #[test]
    fn test_refresh_loads_first_pair() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "M2000B", 10);
        write_pair(dir.path(), "M1000A", 10);
        fs::write(dir.path().join("M3000C.csv"), "t,1,1,1\n").unwrap();

        let mut app = directory_app(dir.path());
        app.refresh();

        let keys: Vec<&str> = app.state.pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["M1000A", "M2000B"]);

        let view = app.state.view.as_ref().unwrap();
        assert_eq!(view.key, "M1000A");
        assert_eq!(view.window, Window { start: 4, count: 2 });
        assert_eq!(view.magnitude.values, vec![4.0, 5.0]);
        assert_eq!(view.power.values, vec![40.0, 50.0]);
    }

    #[test]
    fn test_keys_change_selection_and_window() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "M1000A", 10);
        write_pair(dir.path(), "M2000B", 10);

        let mut app = directory_app(dir.path());
        app.refresh();

        app.handle_key(KeyCode::Down);
        assert_eq!(app.state.view.as_ref().unwrap().key, "M2000B");

        app.handle_key(KeyCode::Right);
        assert_eq!(app.state.view.as_ref().unwrap().window, Window { start: 3, count: 4 });

        app.handle_key(KeyCode::Right);
        assert_eq!(app.state.view.as_ref().unwrap().window, Window { start: 0, count: 10 });

        app.handle_key(KeyCode::Char('q'));
        assert!(app.state.should_quit);
    }

    #[test]
    fn test_no_pairs_does_not_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("M1A.csv"), "t,1,1,1\n").unwrap();

        let mut app = directory_app(dir.path());
        app.refresh();

        assert!(app.state.pairs.is_empty());
        assert!(app.state.view.is_none());
        assert!(app.state.status_message.contains("No valid file pairs"));
    }

    #[test]
    fn test_bad_rows_clear_the_charts() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "M1000A", 10);
        write_pair(dir.path(), "M2000B", 10);
        fs::write(dir.path().join("M2000B_power.csv"), "t,x\n".repeat(10)).unwrap();

        let mut app = directory_app(dir.path());
        app.refresh();
        assert!(app.state.view.is_some());

        app.handle_key(KeyCode::Down);
        assert!(app.state.view.is_none());
        assert!(app.state.status_message.starts_with("❌"));
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = directory_app(&dir.path().join("absent"));
        app.refresh();

        assert!(app.state.pairs.is_empty());
        assert!(app.state.status_message.starts_with("❌"));
    }

    #[test]
    fn test_upload_session_flow() {
        let picked = tempfile::tempdir().unwrap();
        write_pair(picked.path(), "M1234A", 6);
        let paths = vec![
            picked.path().join("M1234A.csv"),
            picked.path().join("M1234A_power.csv"),
        ];

        let mut app = App::new(Box::new(UploadSource::new().unwrap()), CHOICES.to_vec(), 0);
        app.refresh();
        assert!(app.state.uploads_enabled);
        assert!(app.state.pairs.is_empty());

        assert_eq!(app.upload(&paths).unwrap(), 2);
        app.refresh();

        assert_eq!(app.state.pairs.len(), 1);
        assert_eq!(app.state.view.as_ref().unwrap().window, Window { start: 2, count: 2 });
    }

    #[test]
    fn test_directory_source_ignores_upload_key() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "M1000A", 4);

        let mut app = directory_app(dir.path());
        app.refresh();
        let before = app.state.status_message.clone();

        app.handle_key(KeyCode::Char('u'));

        assert_eq!(app.state.status_message, before);
    }
}
