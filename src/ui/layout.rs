use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the filter sidebar
const SIDEBAR_WIDTH: u16 = 30;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub sidebar_area: Rect,
    pub search_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: progress gauge (4 rows)
/// - Body: Sidebar (filters) | Search bar above List (65%) | Details (35%)
/// - Bottom bar: keybindings / toast (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // List + details
        ])
        .split(columns[1]);

    let list_and_details = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main[1]);

    MainLayout {
        header_area: rows[0],
        sidebar_area: columns[0],
        search_area: main[0],
        list_area: list_and_details[0],
        details_area: list_and_details[1],
        keybindings_area: rows[2],
    }
}

/// Create centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
