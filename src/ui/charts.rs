// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/charts.rs - Chart Components
// ═══════════════════════════════════════════════════════════════════════════════
// Contains: Acceleration magnitude chart, Power chart (stacked)
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::helpers::axis_labels;
use crate::signal::SampleSeries;
use crate::state::ViewerState;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Chart Panel / لوحة الرسم البياني
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the right chart panel
/// رسم لوحة الرسم البياني اليمنى
pub fn render_chart_panel(frame: &mut Frame, area: Rect, state: &ViewerState) {
    // Split into two charts: magnitude on top, power below
    // تقسيم إلى رسمين: السعة في الأعلى والقدرة في الأسفل
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Magnitude Chart
            Constraint::Percentage(50), // Power Chart
        ])
        .split(area);

    match &state.view {
        Some(view) if !view.magnitude.is_empty() => {
            let magnitude_title = format!("📈 Acceleration Magnitude - {}", view.key);
            let power_title = format!("⚡ Power - {}", view.key);
            render_series_chart(frame, chunks[0], &magnitude_title, &view.magnitude, Color::Cyan);
            render_series_chart(frame, chunks[1], &power_title, &view.power, Color::LightYellow);
        }
        _ => {
            render_empty_chart(frame, chunks[0], "📈 Acceleration Magnitude", "Acceleration Magnitude");
            render_empty_chart(frame, chunks[1], "⚡ Power", "Power (W)");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Series Chart / رسم السلسلة
// ═══════════════════════════════════════════════════════════════════════════════

/// Render one time series with axes scaled to its data
/// رسم سلسلة زمنية واحدة مع محاور مناسبة لبياناتها
fn render_series_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &SampleSeries,
    color: Color,
) {
    let data_points = series.points();
    let (y_min, y_max) = series.bounds();
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![Dataset::default()
        .name(series.label)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data_points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .x_axis(
            Axis::default()
                .title("Sample")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(axis_labels(0.0, x_max, 0)),
        )
        .y_axis(
            Axis::default()
                .title(series.label)
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max, 2)),
        );

    frame.render_widget(chart, area);
}

/// Placeholder chart when nothing is loaded
fn render_empty_chart(frame: &mut Frame, area: Rect, title: &str, y_title: &str) {
    let datasets = vec![Dataset::default()
        .name("No Data")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Gray))
        .data(&[])];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .title("Sample")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.0]),
        )
        .y_axis(
            Axis::default()
                .title(y_title.to_string())
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.0]),
        );

    frame.render_widget(chart, area);
}
