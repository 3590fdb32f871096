use crate::app::AppState;
use crate::domain::progress_phrase;
use crate::ui::styles::{border_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the garden progress header
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Task Garden 🌱 ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let summary = Line::from(vec![
        Span::raw(format!("{} ", progress_phrase(&stats))),
        Span::styled(
            format!("· {}/{} harvested", stats.completed, stats.total),
            border_style(),
        ),
    ]);
    f.render_widget(Paragraph::new(summary), rows[0]);

    let percent = stats.progress.clamp(0.0, 100.0).round() as u16;
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, rows[1]);
}
