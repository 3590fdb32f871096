use crate::domain::{Priority, PriorityFilter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The task list / no text field
    List,
    /// A text-entry field (search box, task form)
    TextEntry,
}

/// Action produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewTask,
    ToggleHelp,
    FocusSearch,
    ToggleSelected,
    EditSelected,
    DeleteSelected,
    NavigateNext,
    NavigatePrev,
    Cancel,
    SelectAll,
    FilterPriority(PriorityFilter),
    CycleStatusFilter,
    CycleSort,
    ClearCompleted,
    Quit,
}

/// Help-table entry
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

/// Shortcuts listed in the help overlay
pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut { key: "N", description: "Plant a new task" },
    Shortcut { key: "Space", description: "Toggle selected task completion" },
    Shortcut { key: "E", description: "Edit selected task" },
    Shortcut { key: "D", description: "Delete selected task" },
    Shortcut { key: "/", description: "Focus search" },
    Shortcut { key: "?", description: "Toggle keyboard shortcuts help" },
    Shortcut { key: "↑/↓", description: "Navigate through tasks" },
    Shortcut { key: "1", description: "Filter critical priority" },
    Shortcut { key: "2", description: "Filter high priority" },
    Shortcut { key: "3", description: "Filter medium priority" },
    Shortcut { key: "4", description: "Filter low priority" },
    Shortcut { key: "0", description: "Show all priorities" },
    Shortcut { key: "F", description: "Cycle status filter" },
    Shortcut { key: "S", description: "Cycle sort order" },
    Shortcut { key: "X", description: "Clear harvested tasks" },
    Shortcut { key: "Esc", description: "Cancel/close dialogs" },
    Shortcut { key: "Ctrl+A", description: "Select all tasks" },
    Shortcut { key: "Q", description: "Quit" },
];

/// Map a key press to an action.
///
/// Stateless: each event is judged on its own against the focus target and
/// modifier flags. Inside a text field only `Esc` is recognised.
pub fn dispatch(key: &KeyEvent, focus: FocusTarget) -> Option<Action> {
    if focus == FocusTarget::TextEntry {
        return (key.code == KeyCode::Esc).then_some(Action::Cancel);
    }

    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META);

    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Down => Some(Action::NavigateNext),
        KeyCode::Up => Some(Action::NavigatePrev),
        KeyCode::Char(c) => dispatch_char(c.to_ascii_lowercase(), command),
        _ => None,
    }
}

fn dispatch_char(c: char, command: bool) -> Option<Action> {
    if command {
        return match c {
            'a' => Some(Action::SelectAll),
            'c' => Some(Action::Quit),
            _ => None,
        };
    }

    match c {
        'n' => Some(Action::NewTask),
        '?' => Some(Action::ToggleHelp),
        '/' => Some(Action::FocusSearch),
        ' ' => Some(Action::ToggleSelected),
        'e' => Some(Action::EditSelected),
        'd' => Some(Action::DeleteSelected),
        '1' => Some(Action::FilterPriority(PriorityFilter::Only(Priority::Critical))),
        '2' => Some(Action::FilterPriority(PriorityFilter::Only(Priority::High))),
        '3' => Some(Action::FilterPriority(PriorityFilter::Only(Priority::Medium))),
        '4' => Some(Action::FilterPriority(PriorityFilter::Only(Priority::Low))),
        '0' => Some(Action::FilterPriority(PriorityFilter::All)),
        'f' => Some(Action::CycleStatusFilter),
        's' => Some(Action::CycleSort),
        'x' => Some(Action::ClearCompleted),
        'q' => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn on_list(event: KeyEvent) -> Option<Action> {
        dispatch(&event, FocusTarget::List)
    }

    #[test]
    fn test_single_key_table() {
        assert_eq!(on_list(key(KeyCode::Char('n'))), Some(Action::NewTask));
        assert_eq!(on_list(key(KeyCode::Char('?'))), Some(Action::ToggleHelp));
        assert_eq!(on_list(key(KeyCode::Char('/'))), Some(Action::FocusSearch));
        assert_eq!(on_list(key(KeyCode::Char(' '))), Some(Action::ToggleSelected));
        assert_eq!(on_list(key(KeyCode::Char('e'))), Some(Action::EditSelected));
        assert_eq!(on_list(key(KeyCode::Char('d'))), Some(Action::DeleteSelected));
        assert_eq!(on_list(key(KeyCode::Down)), Some(Action::NavigateNext));
        assert_eq!(on_list(key(KeyCode::Up)), Some(Action::NavigatePrev));
        assert_eq!(on_list(key(KeyCode::Esc)), Some(Action::Cancel));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        let shifted = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert_eq!(on_list(shifted), Some(Action::NewTask));
        assert_eq!(on_list(key(KeyCode::Char('E'))), Some(Action::EditSelected));
    }

    #[test]
    fn test_priority_filter_digits() {
        let expected = [
            ('1', PriorityFilter::Only(Priority::Critical)),
            ('2', PriorityFilter::Only(Priority::High)),
            ('3', PriorityFilter::Only(Priority::Medium)),
            ('4', PriorityFilter::Only(Priority::Low)),
            ('0', PriorityFilter::All),
        ];
        for (digit, filter) in expected {
            assert_eq!(
                on_list(key(KeyCode::Char(digit))),
                Some(Action::FilterPriority(filter))
            );
        }
    }

    #[test]
    fn test_modifier_disambiguates_delete_and_select_all() {
        assert_eq!(on_list(ctrl('d')), None);
        assert_eq!(on_list(key(KeyCode::Char('a'))), None);
        assert_eq!(on_list(ctrl('a')), Some(Action::SelectAll));
        assert_eq!(
            on_list(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SUPER)),
            Some(Action::SelectAll)
        );
    }

    #[test]
    fn test_text_entry_suppresses_everything_but_cancel() {
        for code in [
            KeyCode::Char('n'),
            KeyCode::Char('d'),
            KeyCode::Char(' '),
            KeyCode::Char('1'),
            KeyCode::Down,
            KeyCode::Enter,
        ] {
            assert_eq!(dispatch(&key(code), FocusTarget::TextEntry), None);
        }
        assert_eq!(dispatch(&ctrl('a'), FocusTarget::TextEntry), None);
        assert_eq!(
            dispatch(&key(KeyCode::Esc), FocusTarget::TextEntry),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_unmatched_keys() {
        assert_eq!(on_list(key(KeyCode::Char('z'))), None);
        assert_eq!(on_list(key(KeyCode::Enter)), None);
        assert_eq!(on_list(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(on_list(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(on_list(ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_help_table_covers_priority_shortcuts() {
        let keys: Vec<&str> = SHORTCUTS.iter().map(|s| s.key).collect();
        for k in ["0", "1", "2", "3", "4", "Esc", "Ctrl+A"] {
            assert!(keys.contains(&k), "missing {}", k);
        }
    }
}
