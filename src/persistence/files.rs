use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the garden directory, both local and in the home directory
pub const GARDEN_DIR_NAME: &str = ".garden";

/// Storage slot holding the serialized task collection
pub const TASKS_FILE_NAME: &str = "tasks.json";

const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "garden.log";

/// Get the garden directory - checks for local .garden first, then falls back to global ~/.garden
pub fn get_garden_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_garden(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(GARDEN_DIR_NAME))
}

/// Find local .garden directory by walking up the directory tree
fn find_local_garden(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let garden_dir = current.join(GARDEN_DIR_NAME);
        if garden_dir.is_dir() {
            return Some(garden_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the garden directory exists
pub fn ensure_garden_dir() -> Result<PathBuf> {
    let dir = get_garden_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .garden directory in the current directory
pub fn init_local_garden() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let garden_dir = current_dir.join(GARDEN_DIR_NAME);

    if garden_dir.exists() {
        anyhow::bail!("Garden directory already exists: {}", garden_dir.display());
    }

    fs::create_dir_all(&garden_dir)
        .with_context(|| format!("Failed to create directory: {}", garden_dir.display()))?;

    Ok(garden_dir)
}

/// Path to the task blob
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_garden_dir()?.join(TASKS_FILE_NAME))
}

/// Path to settings.json (view preferences)
pub fn settings_file() -> Result<PathBuf> {
    Ok(ensure_garden_dir()?.join(SETTINGS_FILE_NAME))
}

/// Path to the log file
pub fn log_file() -> Result<PathBuf> {
    Ok(ensure_garden_dir()?.join(LOG_FILE_NAME))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
