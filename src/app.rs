use crate::domain::{
    compute_stats, derive_view, Priority, PriorityFilter, Task, TaskPatch, TaskStats, UiMode,
    ViewParams,
};
use crate::input::Action;
use crate::notifications::Toasts;
use crate::persistence::Settings;
use crate::store::TaskStore;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Which field of the task form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Priority,
}

impl FormField {
    fn next(&self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }
}

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub editing_field: FormField,
    /// Task being edited; `None` when adding
    pub editing_id: Option<Uuid>,
}

impl InputFormState {
    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            editing_field: FormField::Title,
            editing_id: None,
        }
    }

    fn for_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            editing_field: FormField::Title,
            editing_id: Some(task.id),
        }
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub params: ViewParams,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub toasts: Toasts,
    pub use_emoji: bool,
    needs_redraw: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(mut store: TaskStore, settings: &Settings) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |event| {
            debug!(?event, "store changed");
            flag.set(true);
        });

        let mut app = Self {
            store,
            params: ViewParams {
                status: settings.status_filter,
                priority: settings.priority_filter,
                search: String::new(),
                sort: settings.sort,
            },
            ui_mode: UiMode::Normal,
            input_form: None,
            toasts: Toasts::default(),
            use_emoji: settings.use_emoji,
            needs_redraw,
        };
        app.reconcile_selection();
        app
    }

    /// Snapshot of the view preferences worth keeping between runs
    pub fn settings(&self) -> Settings {
        Settings {
            status_filter: self.params.status,
            priority_filter: self.params.priority,
            sort: self.params.sort,
            use_emoji: self.use_emoji,
        }
    }

    /// Filtered and sorted tasks to render
    pub fn visible_tasks(&self) -> Vec<Task> {
        derive_view(self.store.tasks(), &self.params)
    }

    /// Statistics over the whole collection, ignoring filters
    pub fn stats(&self) -> TaskStats {
        compute_stats(self.store.tasks())
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.selected().and_then(|id| self.store.get(id))
    }

    /// Index of the selection within the derived view
    pub fn selected_index(&self, visible: &[Task]) -> Option<usize> {
        let id = self.store.selected()?;
        visible.iter().position(|t| t.id == id)
    }

    /// Point the selection at a visible task: keep it if it is still shown,
    /// otherwise fall back to the first visible task (or nothing)
    pub fn reconcile_selection(&mut self) {
        let visible = self.visible_tasks();
        if self.selected_index(&visible).is_none() {
            self.store.set_selected(visible.first().map(|t| t.id));
        }
    }

    /// True once since the last call if anything changed that needs a redraw
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Expire stale toasts
    pub fn tick(&mut self) {
        let had_toast = self.toasts.current().is_some();
        self.toasts.expire(Instant::now());
        if had_toast && self.toasts.current().is_none() {
            self.request_redraw();
        }
    }

    /// Apply a dispatched action. Returns true when the app should quit.
    pub fn apply(&mut self, action: Action) -> bool {
        debug!(?action, "apply action");
        match action {
            Action::NewTask => self.start_add_task(),
            Action::ToggleHelp => self.toggle_help(),
            Action::FocusSearch => self.ui_mode = UiMode::Searching,
            Action::ToggleSelected => self.toggle_selected(),
            Action::EditSelected => self.start_edit_task(),
            Action::DeleteSelected => self.delete_selected(),
            Action::NavigateNext => self.navigate_next(),
            Action::NavigatePrev => self.navigate_prev(),
            Action::Cancel => self.cancel(),
            Action::SelectAll => self.select_all(),
            Action::FilterPriority(filter) => self.set_priority_filter(filter),
            Action::CycleStatusFilter => self.cycle_status_filter(),
            Action::CycleSort => self.cycle_sort(),
            Action::ClearCompleted => self.clear_completed(),
            Action::Quit => return true,
        }
        self.request_redraw();
        false
    }

    pub fn navigate_next(&mut self) {
        let visible = self.visible_tasks();
        let next = match self.selected_index(&visible) {
            Some(idx) => visible.get(idx + 1),
            None => visible.first(),
        };
        if let Some(task) = next {
            self.store.set_selected(Some(task.id));
        }
    }

    pub fn navigate_prev(&mut self) {
        let visible = self.visible_tasks();
        if let Some(idx) = self.selected_index(&visible) {
            if idx > 0 {
                self.store.set_selected(Some(visible[idx - 1].id));
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.store.selected() else {
            return;
        };
        if self.store.toggle(id) {
            let harvested = self.store.get(id).is_some_and(|t| t.completed);
            if harvested {
                self.toasts.success("Task harvested");
            } else {
                self.toasts.success("Task back in the soil");
            }
            self.reconcile_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.store.selected() else {
            return;
        };
        if self.store.delete(id) {
            self.toasts.success("Task deleted");
            self.reconcile_selection();
        }
    }

    /// Remove every completed task
    pub fn clear_completed(&mut self) {
        let removed = self.store.delete_all_completed();
        if removed > 0 {
            let plural = if removed > 1 { "s" } else { "" };
            self.toasts
                .success(format!("Deleted {} completed task{}", removed, plural));
            self.reconcile_selection();
        }
    }

    pub fn select_all(&mut self) {
        self.toasts.info("Select all is not available yet");
    }

    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.params.priority = filter;
        self.reconcile_selection();
    }

    pub fn cycle_status_filter(&mut self) {
        self.params.status = self.params.status.next();
        self.reconcile_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.params.sort = self.params.sort.next();
        self.reconcile_selection();
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            _ => UiMode::Help,
        };
    }

    /// Close whatever overlay is open: form, help or search focus
    pub fn cancel(&mut self) {
        match self.ui_mode {
            UiMode::AddingTask | UiMode::EditingTask => self.cancel_input_form(),
            UiMode::Help | UiMode::Searching => self.ui_mode = UiMode::Normal,
            UiMode::Normal => {}
        }
    }

    /// Open the form for a new task
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::blank());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the form pre-filled with the selected task
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_form = Some(InputFormState::for_task(task));
            self.ui_mode = UiMode::EditingTask;
        }
    }

    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = form.editing_field.next();
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                FormField::Title => form.title.push(c),
                FormField::Description => form.description.push(c),
                FormField::Priority => {
                    if let Some(priority) = priority_for_digit(c) {
                        form.priority = priority;
                    }
                }
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                FormField::Title => {
                    form.title.pop();
                }
                FormField::Description => {
                    form.description.pop();
                }
                FormField::Priority => {}
            }
        }
    }

    /// Step the form's priority; `forward` moves toward lower urgency
    pub fn input_form_cycle_priority(&mut self, forward: bool) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == FormField::Priority {
                form.priority = if forward {
                    form.priority.next()
                } else {
                    form.priority.prev()
                };
            }
        }
    }

    /// Submit the form. A blank title keeps the form open with an error.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };

        if form.title.trim().is_empty() {
            self.toasts.error("Every task needs a title");
            self.input_form = Some(form);
            return;
        }

        match form.editing_id {
            Some(id) => {
                let patch = TaskPatch::from_form(&form.title, &form.description, form.priority);
                if self.store.update(id, patch) {
                    self.toasts.success("Task updated");
                }
            }
            None => {
                let description = Some(form.description.as_str());
                if self.store.add(&form.title, form.priority, description).is_some() {
                    self.toasts.success("Task created successfully!");
                }
            }
        }

        self.ui_mode = UiMode::Normal;
        self.reconcile_selection();
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn search_add_char(&mut self, c: char) {
        self.params.search.push(c);
        self.reconcile_selection();
    }

    pub fn search_backspace(&mut self) {
        self.params.search.pop();
        self.reconcile_selection();
    }

    /// Leave the search box, keeping the query applied
    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }
}

fn priority_for_digit(c: char) -> Option<Priority> {
    match c {
        '1' => Some(Priority::Critical),
        '2' => Some(Priority::High),
        '3' => Some(Priority::Medium),
        '4' => Some(Priority::Low),
        _ => None,
    }
}
