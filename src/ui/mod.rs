// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/mod.rs - Terminal User Interface Module
// ═══════════════════════════════════════════════════════════════════════════════
// This module implements the TUI using Ratatui.
// Features:
// - Two-column layout (Selection | Charts)
// - Acceleration magnitude and power charts
// - Pair list and window size selector
// - "No pairs" warning popup
// ═══════════════════════════════════════════════════════════════════════════════

mod charts;
mod controls;
mod helpers;
mod status_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::ViewerState;

pub use helpers::centered_rect;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Main Render Function / دالة الرسم الرئيسية
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the entire UI
/// رسم واجهة المستخدم بالكامل
pub fn render(frame: &mut Frame, state: &ViewerState) {
    // Create main layout: two columns / إنشاء التخطيط الرئيسي: عمودين
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Left panel - Selection / اللوحة اليسرى - الاختيار
            Constraint::Percentage(70), // Right panel - Charts / اللوحة اليمنى - الرسوم البيانية
        ])
        .split(frame.area());

    status_panel::render(frame, main_chunks[0], state);
    charts::render_chart_panel(frame, main_chunks[1], state);

    if !state.has_pairs() {
        render_no_pairs_warning(frame, state);
    }
}

/// Centered warning shown when the source has no complete pair
/// تحذير في المنتصف عند عدم وجود أزواج كاملة
fn render_no_pairs_warning(frame: &mut Frame, state: &ViewerState) {
    let area = centered_rect(50, 30, frame.area());

    let mut text = vec![
        Line::from(Span::styled(
            "⚠️ No valid file pairs found",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Source: {}", state.source_label)),
        Line::from("Expected M####L.csv with M####L_power.csv"),
    ];
    if state.uploads_enabled {
        text.push(Line::from("Press U to upload files, R to rescan"));
    } else {
        text.push(Line::from("Press R to rescan, Q to quit"));
    }

    let block = Block::default()
        .title("Warning")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::FilePair;
    use crate::state::PairView;
    use crate::window::{PairWindow, Window};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state: &ViewerState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_warns_without_pairs() {
        let state = ViewerState::new("📁 data".to_string(), vec![1_000], 0);

        assert!(screen_text(&state).contains("No valid file pairs found"));
    }

    #[test]
    fn test_render_loaded_pair() {
        let mut state = ViewerState::new("📁 data".to_string(), vec![1_000, 5_000], 0);
        state.set_pairs(vec![FilePair::from_key("M1234A")]);
        state.view = Some(PairView::from_window(
            "M1234A",
            PairWindow {
                window: Window { start: 10, count: 3 },
                total_rows: 23,
                acceleration: vec![[3.0, 4.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]],
                power: vec![100.0, 110.0, 105.0],
            },
        ));

        let text = screen_text(&state);

        assert!(!text.contains("No valid file pairs found"));
        assert!(text.contains("M1234A"));
        assert!(text.contains("Power"));
        assert!(text.contains("10..13"));
    }
}
