pub mod codec;
pub mod files;
pub mod settings;
pub mod storage;

pub use codec::{decode_tasks, encode_tasks};
pub use files::{
    atomic_write, ensure_garden_dir, get_garden_dir, init_local_garden, log_file,
    settings_file, tasks_file,
};
pub use settings::{load_settings, save_settings, Settings};
pub use storage::{FileStorage, TaskStorage};
#[cfg(test)]
pub use storage::MemoryStorage;

/// Failures at the storage boundary
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0:#}")]
    Io(anyhow::Error),
    #[error("stored tasks are malformed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("stored task {id} is invalid: {reason}")]
    Invalid { id: uuid::Uuid, reason: &'static str },
    #[error("failed to serialize tasks: {0}")]
    Encode(#[source] serde_json::Error),
}
