use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, priority_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app.selected_task() else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style()),
        Span::styled(task.priority.label(), priority_style(task.priority)),
    ]));

    let status = if task.completed { "Harvested" } else { "Growing" };
    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style()),
        Span::raw(status),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Planted:  ", title_style()),
        Span::raw(task.created_at.format("%Y-%m-%d %H:%M").to_string()),
    ]));

    if let Some(done_at) = task.completed_at {
        lines.push(Line::from(vec![
            Span::styled("Harvested: ", title_style()),
            Span::raw(done_at.format("%Y-%m-%d %H:%M").to_string()),
        ]));
    }
    lines.push(Line::raw(""));

    match &task.description {
        Some(description) => {
            lines.push(Line::from(Span::styled("Description:", title_style())));
            for text in description.lines() {
                lines.push(Line::raw(format!("  {}", text)));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Description: (empty)",
            default_style(),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
