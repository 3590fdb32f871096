use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search bar
pub fn render_search_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Searching;

    let line = if focused {
        Line::from(vec![
            Span::raw(app.params.search.clone()),
            Span::styled("█", modal_title_style()),
        ])
    } else if app.params.search.is_empty() {
        Line::from(Span::styled("Press / to search your garden", hint_style()))
    } else {
        Line::raw(app.params.search.clone())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                focused_border_style()
            } else {
                border_style()
            })
            .title(Span::styled(" Search ", title_style())),
    );

    f.render_widget(paragraph, area);
}
