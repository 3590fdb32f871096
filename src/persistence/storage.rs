use super::files::{atomic_write, read_file};
use super::StorageError;
use std::path::PathBuf;

/// A single named slot holding the serialized task collection
pub trait TaskStorage {
    /// Read the stored blob; `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored blob
    fn save(&self, blob: &str) -> Result<(), StorageError>;
}

/// Blob stored as a file, replaced atomically on every save
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        read_file(&self.path).map_err(StorageError::Io)
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        atomic_write(&self.path, blob).map_err(StorageError::Io)
    }
}

/// In-memory slot for tests; clones share the same blob
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-filled slot
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: std::rc::Rc::new(std::cell::RefCell::new(Some(blob.to_string()))),
        }
    }

    /// Current contents of the slot
    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

#[cfg(test)]
impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
