use crate::app::{AppState, FormField, InputFormState};
use crate::domain::{priority_glyph, Priority};
use crate::ui::{
    layout::create_modal_area,
    styles::{active_filter_style, hint_style, modal_bg_style, modal_title_style, priority_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const FORM_HEIGHT: u16 = 14;

/// Label for a field, marked while it has focus
fn field_label(form: &InputFormState, field: FormField, label: &'static str) -> Line<'static> {
    if form.editing_field == field {
        Line::from(Span::styled(format!("{} (editing)", label), modal_title_style()))
    } else {
        Line::raw(label)
    }
}

/// Text value with a cursor on the focused field
fn text_line(value: &str, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if focused {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ])
}

/// Priority picker: the chosen priority is highlighted
fn priority_line(form: &InputFormState, use_emoji: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for priority in Priority::all() {
        let style = if *priority == form.priority {
            active_filter_style()
        } else {
            priority_style(*priority)
        };
        spans.push(Span::styled(
            format!(" {} {} ", priority_glyph(*priority, use_emoji), priority.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Render the add/edit task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let modal_area = create_modal_area(area, FORM_HEIGHT);
    f.render_widget(Clear, modal_area);

    let title_text = if form.editing_id.is_some() {
        " Edit Task "
    } else {
        " Plant a New Task "
    };

    let mut lines = vec![Line::raw("")];

    lines.push(field_label(form, FormField::Title, "Title:"));
    lines.push(text_line(&form.title, form.editing_field == FormField::Title));
    lines.push(Line::raw(""));

    lines.push(field_label(form, FormField::Description, "Description (optional):"));
    lines.push(text_line(
        &form.description,
        form.editing_field == FormField::Description,
    ));
    lines.push(Line::raw(""));

    lines.push(field_label(form, FormField::Priority, "Priority (←/→ or 1-4):"));
    lines.push(priority_line(form, app.use_emoji));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled(
        "Tab to switch fields  ·  Enter to save  ·  Esc to cancel",
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
