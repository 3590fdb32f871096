use super::shortcuts::{dispatch, Action, FocusTarget};
use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Raw mode swallows SIGINT, so Ctrl+C quits from every mode
    if is_interrupt(&key) {
        return Ok(app.apply(Action::Quit));
    }

    let focus = if app.ui_mode.is_text_entry() {
        FocusTarget::TextEntry
    } else {
        FocusTarget::List
    };

    if let Some(action) = dispatch(&key, focus) {
        if app.ui_mode == UiMode::Help && !closes_help(action) {
            return Ok(false);
        }
        return Ok(app.apply(action));
    }

    match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
        UiMode::Normal | UiMode::Help => {}
    }
    app.request_redraw();
    Ok(false)
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Only these get through while the help overlay is up
fn closes_help(action: Action) -> bool {
    matches!(action, Action::ToggleHelp | Action::Cancel | Action::Quit)
}

/// Field editing inside the add/edit form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Left => app.input_form_cycle_priority(false),
        KeyCode::Right => app.input_form_cycle_priority(true),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_form_add_char(c)
        }
        _ => {}
    }
}

/// Typing into the search box
fn handle_search_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down => app.finish_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_add_char(c)
        }
        _ => {}
    }
}
