use crate::app::AppState;
use crate::domain::{completion_badge, priority_glyph, StatusFilter, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, priority_style, selected_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Short relative age such as "5m ago" or "2d ago"
fn format_age(created_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (now - created_at).num_minutes().max(0);
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Message shown when the view is empty
fn empty_message(app: &AppState) -> &'static str {
    if app.store.is_empty() {
        "Your garden is empty. Press n to plant your first task."
    } else if !app.params.search.is_empty() {
        "No tasks match your search."
    } else {
        match app.params.status {
            StatusFilter::Completed => "Nothing harvested yet.",
            StatusFilter::Active => "Everything is harvested!",
            StatusFilter::All => "No tasks match these filters.",
        }
    }
}

/// Render the task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();
    let title = format!(
        " Tasks ({}/{}) · {} ",
        visible.len(),
        app.store.len(),
        app.params.sort.label()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if visible.is_empty() {
        let empty = Paragraph::new(empty_message(app))
            .style(default_style())
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let now = Local::now();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| ListItem::new(create_task_line(task, app.use_emoji, now)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style());

    let mut state = ListState::default();
    state.select(app.selected_index(&visible));
    f.render_stateful_widget(list, area, &mut state);
}

/// Format: [✓] 🌻 Water the tomatoes   3h ago
fn create_task_line(task: &Task, use_emoji: bool, now: DateTime<Local>) -> Line<'static> {
    let title_style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(format!("{} ", completion_badge(task.completed))),
        Span::styled(
            format!("{} ", priority_glyph(task.priority, use_emoji)),
            priority_style(task.priority),
        ),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(format_age(task.created_at, now), border_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::Duration;

    #[test]
    fn test_format_age() {
        let now = Local::now();
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_age(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_age(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_create_task_line() {
        let mut task = Task::new("Water plants", Priority::Critical, None).unwrap();
        task.toggle();
        let line = create_task_line(&task, false, Local::now());

        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("[✓] !! Water plants"));
        assert!(text.ends_with("just now"));
    }
}
