pub mod details_pane;
pub mod filter_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod progress_pane;
pub mod search_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use filter_pane::render_filter_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_help_modal;
use progress_pane::render_progress_pane;
use ratatui::Frame;
use search_pane::render_search_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_progress_pane(f, app, layout.header_area);
    render_filter_pane(f, app, layout.sidebar_area);
    render_search_pane(f, app, layout.search_area);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);
    render_keybindings(f, app.ui_mode, app.toasts.current(), layout.keybindings_area);

    // Overlays
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    } else if app.ui_mode == UiMode::Help {
        render_help_modal(f, size);
    }
}
