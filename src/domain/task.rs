use super::enums::Priority;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
///
/// Field names serialize in camelCase so the storage blob keeps the
/// `createdAt` / `completedAt` record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create a new, incomplete task. Returns `None` when the title is blank.
    pub fn new(title: &str, priority: Priority, description: Option<&str>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: normalize_description(description),
            priority,
            completed: false,
            created_at: Local::now(),
            completed_at: None,
        })
    }

    /// Flip completion state, stamping or clearing `completed_at`
    pub fn toggle(&mut self) {
        self.set_completed(!self.completed);
    }

    /// Move to the given completion state; no-op if already there
    pub fn set_completed(&mut self, completed: bool) {
        if self.completed == completed {
            return;
        }
        self.completed = completed;
        self.completed_at = if completed { Some(Local::now()) } else { None };
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                self.title = trimmed.to_string();
            }
        }
        if let Some(description) = patch.description {
            self.description = normalize_description(description.as_deref());
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(completed) = patch.completed {
            self.set_completed(completed);
        }
    }

    /// Case-insensitive substring match against title or description
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Fields to merge into an existing task; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch carrying the editable form fields
    pub fn from_form(title: &str, description: &str, priority: Priority) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(Some(description.to_string())),
            priority: Some(priority),
            completed: None,
        }
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
