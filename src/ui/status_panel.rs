// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/status_panel.rs - Selection Panel Components
// ═══════════════════════════════════════════════════════════════════════════════
// Contains: Source status, Pair list, Window selector, Window details
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::controls;
use crate::state::ViewerState;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Main Status Panel / لوحة الحالة الرئيسية
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the left selection panel
/// رسم لوحة الاختيار اليسرى
pub fn render(frame: &mut Frame, area: Rect, state: &ViewerState) {
    // Split into sections / التقسيم إلى أقسام
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Source status / حالة المصدر
            Constraint::Min(6),    // Pair list / قائمة الأزواج
            Constraint::Length(3), // Window selector / محدد النافذة
            Constraint::Length(6), // Window details / تفاصيل النافذة
            Constraint::Length(9), // Controls / التحكم
        ])
        .split(area);

    render_source_status(frame, chunks[0], state);
    render_pair_list(frame, chunks[1], state);
    render_window_selector(frame, chunks[2], state);
    render_window_details(frame, chunks[3], state);
    controls::render(frame, chunks[4], state);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Source Status / حالة المصدر
// ═══════════════════════════════════════════════════════════════════════════════

fn render_source_status(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let text = vec![
        Line::from(Span::styled(
            state.source_label.as_str(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::raw(state.status_message.as_str())),
    ];

    let block = Block::default()
        .title("💧 Source")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Pair List / قائمة الأزواج
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the sorted pair list with the selection highlighted
/// رسم قائمة الأزواج المرتبة مع إبراز الاختيار
fn render_pair_list(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let items: Vec<ListItem> = state
        .pairs
        .iter()
        .map(|pair| ListItem::new(pair.key.as_str()))
        .collect();

    let block = Block::default()
        .title(format!("📋 File Pairs ({})", state.pairs.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if state.has_pairs() {
        list_state.select(Some(state.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Window Selector / محدد النافذة
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the window size choices, current one highlighted
/// رسم خيارات حجم النافذة مع إبراز الحالي
fn render_window_selector(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let mut spans = Vec::with_capacity(state.window_choices.len() * 2);
    for (i, size) in state.window_choices.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == state.window_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(size.to_string(), style));
    }

    let block = Block::default()
        .title("🪟 Samples to display")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Window Details / تفاصيل النافذة
// ═══════════════════════════════════════════════════════════════════════════════

fn render_window_details(frame: &mut Frame, area: Rect, state: &ViewerState) {
    let text = match &state.view {
        Some(view) => vec![
            Line::from(vec![
                Span::raw("Rows: "),
                Span::styled(
                    format!("{}..{}", view.window.start, view.window.end()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" of {}", view.total_rows)),
            ]),
            Line::from(vec![
                Span::raw("Samples: "),
                Span::styled(
                    format!("{}", view.window.count),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(" / {} requested", state.requested_window())),
            ]),
            Line::from(vec![
                Span::raw("Loaded: "),
                Span::styled(
                    view.loaded_at.format("%H:%M:%S").to_string(),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Nothing loaded",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::default()
        .title("📊 Window")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
