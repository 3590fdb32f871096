use crate::input::SHORTCUTS;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the key column in the help table
const KEY_COLUMN: usize = 8;

/// Render the keyboard shortcuts overlay
pub fn render_help_modal(f: &mut Frame, area: Rect) {
    let height = SHORTCUTS.len() as u16 + 5;
    let modal_area = create_modal_area(area, height);

    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    for shortcut in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$}", shortcut.key, width = KEY_COLUMN),
                modal_title_style(),
            ),
            Span::raw(shortcut.description),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Press ? or Esc to close",
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Keyboard Shortcuts ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
