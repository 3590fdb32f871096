pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Priority, PriorityFilter, SortOption, StatusFilter, UiMode};
pub use task::{Task, TaskPatch};
pub use views::{
    completion_badge, compute_stats, derive_view, priority_glyph, progress_phrase,
    sort_tasks, TaskStats, ViewParams,
};
