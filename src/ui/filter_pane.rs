use crate::app::AppState;
use crate::domain::{priority_glyph, Priority, PriorityFilter, StatusFilter};
use crate::ui::styles::{
    active_filter_style, border_style, default_style, hint_style, priority_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter sidebar: status tabs, priority counts, sort order
pub fn render_filter_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("Status (f)", title_style())));
    let tabs: Vec<Span> = StatusFilter::all()
        .iter()
        .flat_map(|status| {
            let count = match status {
                StatusFilter::All => stats.total,
                StatusFilter::Active => stats.active,
                StatusFilter::Completed => stats.completed,
            };
            let style = if *status == app.params.status {
                active_filter_style()
            } else {
                default_style()
            };
            [
                Span::styled(format!(" {} {} ", status.label(), count), style),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(tabs));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled("Priority", title_style())));
    let all_style = if app.params.priority == PriorityFilter::All {
        active_filter_style()
    } else {
        default_style()
    };
    lines.push(Line::from(vec![
        Span::styled("[0] ", hint_style()),
        Span::styled(format!("All ({})", stats.total), all_style),
    ]));
    for (idx, priority) in Priority::all().iter().enumerate() {
        lines.push(priority_line(app, *priority, idx + 1, stats.by_priority.get(*priority)));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Sort (s): ", title_style()),
        Span::raw(app.params.sort.label()),
    ]));

    if stats.completed > 0 {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("x  clear {} harvested", stats.completed),
            hint_style(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Filters ", title_style())),
    );

    f.render_widget(paragraph, area);
}

fn priority_line(app: &AppState, priority: Priority, key: usize, count: usize) -> Line<'static> {
    let label_style = if app.params.priority == PriorityFilter::Only(priority) {
        active_filter_style()
    } else {
        priority_style(priority)
    };

    Line::from(vec![
        Span::styled(format!("[{}] ", key), hint_style()),
        Span::raw(format!("{} ", priority_glyph(priority, app.use_emoji))),
        Span::styled(format!("{} ({})", priority.label(), count), label_style),
    ])
}
