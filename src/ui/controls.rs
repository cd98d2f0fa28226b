// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/controls.rs - Keyboard Controls Display
// ═══════════════════════════════════════════════════════════════════════════════
// Displays available keyboard shortcuts based on the active source
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::ViewerState;

/// Render controls help box
/// رسم مربع مساعدة التحكم
pub fn render(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let mut text = vec![
        key_line("↑↓", Color::Green, " Select pair"),
        key_line("←→", Color::Cyan, " Window size"),
        key_line("Enter/L", Color::Cyan, " Reload"),
        key_line("R", Color::Yellow, " Rescan files"),
    ];
    if state.uploads_enabled {
        text.push(key_line("U", Color::Magenta, " Upload files"));
    }
    text.push(key_line("Q/Esc", Color::Red, " Quit"));

    let block = Block::default()
        .title("⌨️ Controls")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

fn key_line(key: &'static str, color: Color, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(action),
    ])
}
