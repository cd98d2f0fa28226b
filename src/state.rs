// ═══════════════════════════════════════════════════════════════════════════════
// 📦 state.rs - Viewer State
// ═══════════════════════════════════════════════════════════════════════════════
// What the UI shows: discovered pairs, the current selection, the window
// size selector and the last loaded view. Owned by the App; one thread only.
// ═══════════════════════════════════════════════════════════════════════════════

use chrono::{DateTime, Local};

use crate::pairing::FilePair;
use crate::signal::SampleSeries;
use crate::window::{PairWindow, Window};

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Pair View / عرض الزوج
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything the charts need for one selection
/// كل ما تحتاجه الرسوم البيانية لاختيار واحد
#[derive(Debug, Clone)]
pub struct PairView {
    /// Pair key shown in chart titles / مفتاح الزوج
    pub key: String,

    pub window: Window,

    /// Usable rows in the pair / الصفوف القابلة للاستخدام
    pub total_rows: usize,

    pub magnitude: SampleSeries,

    pub power: SampleSeries,

    pub loaded_at: DateTime<Local>,
}

impl PairView {
    pub fn from_window(key: &str, data: PairWindow) -> Self {
        Self {
            key: key.to_string(),
            window: data.window,
            total_rows: data.total_rows,
            magnitude: SampleSeries::acceleration_magnitude(&data.acceleration),
            power: SampleSeries::power(data.power),
            loaded_at: Local::now(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Viewer State / حالة العارض
// ═══════════════════════════════════════════════════════════════════════════════

/// Main viewer state
/// حالة العارض الرئيسية
pub struct ViewerState {
    /// Label of the active file source / وصف مصدر الملفات
    pub source_label: String,

    /// Whether the source takes uploads (U key) / هل يقبل المصدر الرفع
    pub uploads_enabled: bool,

    /// Discovered pairs, sorted by key / الأزواج المكتشفة
    pub pairs: Vec<FilePair>,

    /// Index of the selected pair / فهرس الزوج المختار
    pub selected: usize,

    /// Window sizes offered / أحجام النوافذ المتاحة
    pub window_choices: Vec<usize>,

    /// Index into `window_choices` / فهرس حجم النافذة
    pub window_index: usize,

    /// Last successfully loaded selection / آخر اختيار تم تحميله
    pub view: Option<PairView>,

    /// Status message to display / رسالة الحالة للعرض
    pub status_message: String,

    /// Should the viewer quit? / هل يجب إنهاء العارض؟
    pub should_quit: bool,
}

impl ViewerState {
    pub fn new(source_label: String, window_choices: Vec<usize>, window_index: usize) -> Self {
        let window_index = window_index.min(window_choices.len().saturating_sub(1));
        Self {
            source_label,
            uploads_enabled: false,
            pairs: Vec::new(),
            selected: 0,
            window_choices,
            window_index,
            view: None,
            status_message: "Scanning for file pairs...".to_string(),
            should_quit: false,
        }
    }

    /// Replace the pair list, keeping the selected key when it still exists
    /// استبدال قائمة الأزواج مع الحفاظ على المفتاح المختار
    pub fn set_pairs(&mut self, pairs: Vec<FilePair>) {
        let previous = self.selected_pair().map(|p| p.key.clone());
        self.pairs = pairs;
        self.selected = previous
            .and_then(|key| self.pairs.iter().position(|p| p.key == key))
            .unwrap_or(0);
        if self.pairs.is_empty() {
            self.view = None;
        }
    }

    pub fn has_pairs(&self) -> bool {
        !self.pairs.is_empty()
    }

    pub fn selected_pair(&self) -> Option<&FilePair> {
        self.pairs.get(self.selected)
    }

    /// Move the pair selection by `delta`, clamped to the list.
    /// Returns true if the selection changed.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.pairs.is_empty() {
            return false;
        }
        let last = self.pairs.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(last);
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Currently requested window size
    pub fn requested_window(&self) -> usize {
        self.window_choices
            .get(self.window_index)
            .copied()
            .unwrap_or(crate::config::DEFAULT_WINDOW_CHOICES[0])
    }

    /// Step through the window choices. Returns true if it changed.
    pub fn move_window(&mut self, delta: isize) -> bool {
        if self.window_choices.is_empty() {
            return false;
        }
        let last = self.window_choices.len() - 1;
        let next = self.window_index.saturating_add_signed(delta).min(last);
        let changed = next != self.window_index;
        self.window_index = next;
        changed
    }

    /// Drop the current plots (used when a read fails)
    pub fn clear_view(&mut self) {
        self.view = None;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
