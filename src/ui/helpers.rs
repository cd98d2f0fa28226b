// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/helpers.rs - Helper Functions
// ═══════════════════════════════════════════════════════════════════════════════
// Contains: Layout and axis helpers for UI rendering
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Helper Functions / دوال مساعدة
// ═══════════════════════════════════════════════════════════════════════════════

/// Create a centered rect with given percentage of parent area
/// إنشاء مستطيل في المنتصف بنسبة معينة من المنطقة الأصل
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Min / mid / max labels for an axis
/// عناوين الحد الأدنى والمنتصف والحد الأقصى للمحور
pub fn axis_labels(min: f64, max: f64, precision: usize) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    vec![
        Span::raw(format!("{:.*}", precision, min)),
        Span::raw(format!("{:.*}", precision, mid)),
        Span::raw(format!("{:.*}", precision, max)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 40, parent);

        assert!(rect.x + rect.width <= parent.width);
        assert!(rect.y + rect.height <= parent.height);
        assert!((rect.width as i32 - 50).abs() <= 1);
        assert!((rect.height as i32 - 20).abs() <= 1);
        assert!((rect.x as i32 - 25).abs() <= 1);
    }

    #[test]
    fn test_axis_labels() {
        let labels = axis_labels(0.0, 10.0, 1);
        let text: Vec<String> = labels.iter().map(|s| s.content.to_string()).collect();

        assert_eq!(text, vec!["0.0", "5.0", "10.0"]);
    }
}
