use crate::domain::UiMode;
use crate::notifications::Toast;
use crate::ui::styles::{hint_style, toast_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

fn hints(mode: UiMode) -> Line<'static> {
    match mode {
        UiMode::Searching => Line::raw(" type to filter   Enter/↓ back to list   Esc done"),
        UiMode::AddingTask | UiMode::EditingTask => {
            Line::raw(" Tab next field   ←/→ priority   Enter save   Esc cancel")
        }
        UiMode::Help => Line::raw(" ? or Esc close help"),
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("n new   "),
            Span::raw("Space harvest   "),
            Span::raw("e edit   "),
            Span::raw("d delete   "),
            Span::raw("/ search   "),
            Span::raw("0-4 priority   "),
            Span::raw("f status   "),
            Span::raw("s sort   "),
            Span::raw("? help   "),
            Span::raw("q quit"),
        ]),
    }
}

/// Render the bottom bar: the current toast if any, else keybinding hints
pub fn render_keybindings(f: &mut Frame, mode: UiMode, toast: Option<&Toast>, area: Rect) {
    let paragraph = match toast {
        Some(toast) => Paragraph::new(format!(" {}", toast.message)).style(toast_style(toast.kind)),
        None => Paragraph::new(hints(mode)).style(hint_style()),
    };
    f.render_widget(paragraph, area);
}
