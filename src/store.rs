use crate::domain::{Priority, Task, TaskPatch};
use crate::persistence::{decode_tasks, encode_tasks, StorageError, TaskStorage};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Change notification emitted after each mutation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Added(Uuid),
    Toggled { id: Uuid, completed: bool },
    Updated(Uuid),
    Deleted(Uuid),
    ClearedCompleted(usize),
    SelectionChanged(Option<Uuid>),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Authoritative task collection plus the selection pointer.
///
/// Every mutation writes the full collection back to storage. In-memory state
/// stays the source of truth: write failures are logged and otherwise ignored.
pub struct TaskStore {
    tasks: Vec<Task>,
    selected: Option<Uuid>,
    storage: Box<dyn TaskStorage>,
    listeners: Vec<Listener>,
}

impl TaskStore {
    /// Load the collection from storage. Never fails: an unreadable or corrupt
    /// blob starts an empty garden.
    pub fn open(storage: Box<dyn TaskStorage>) -> Self {
        let tasks = match load_tasks(storage.as_ref()) {
            Ok(tasks) => {
                info!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks, starting empty");
                Vec::new()
            }
        };

        Self {
            tasks,
            selected: None,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Register an observer called after every mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Prepend a new task. Blank titles are a silent no-op returning `None`;
    /// callers validate and report to the user.
    pub fn add(&mut self, title: &str, priority: Priority, description: Option<&str>) -> Option<Task> {
        let Some(task) = Task::new(title, priority, description) else {
            debug!("ignored add with blank title");
            return None;
        };

        self.tasks.insert(0, task.clone());
        self.commit(StoreEvent::Added(task.id));
        Some(task)
    }

    /// Flip completion of the task with `id`. Returns false if it doesn't exist.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        task.toggle();
        let completed = task.completed;
        self.commit(StoreEvent::Toggled { id, completed });
        true
    }

    /// Merge `patch` into the task with `id`. Returns false if it doesn't exist.
    pub fn update(&mut self, id: Uuid, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        task.apply(patch);
        self.commit(StoreEvent::Updated(id));
        true
    }

    /// Remove the task with `id`, clearing selection if it pointed there
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }

        if self.selected == Some(id) {
            self.selected = None;
        }
        self.commit(StoreEvent::Deleted(id));
        true
    }

    /// Remove every completed task and return how many went.
    /// A selection pointing at a removed task is cleared.
    pub fn delete_all_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return 0;
        }

        if let Some(id) = self.selected {
            if self.get(id).is_none() {
                self.selected = None;
            }
        }
        self.commit(StoreEvent::ClearedCompleted(removed));
        removed
    }

    /// Set the transient selection pointer (not persisted)
    pub fn set_selected(&mut self, id: Option<Uuid>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.notify(&StoreEvent::SelectionChanged(id));
    }

    fn commit(&mut self, event: StoreEvent) {
        self.persist();
        self.notify(&event);
    }

    fn persist(&self) {
        match encode_tasks(&self.tasks).and_then(|blob| self.storage.save(&blob)) {
            Ok(()) => debug!(count = self.tasks.len(), "saved tasks"),
            Err(err) => error!(error = %err, "failed to save tasks"),
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

fn load_tasks(storage: &dyn TaskStorage) -> Result<Vec<Task>, StorageError> {
    match storage.load()? {
        Some(blob) if !blob.trim().is_empty() => decode_tasks(&blob),
        _ => Ok(Vec::new()),
    }
}
