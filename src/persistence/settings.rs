use crate::domain::{PriorityFilter, SortOption, StatusFilter};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// View preferences stored in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub status_filter: StatusFilter,
    #[serde(default)]
    pub priority_filter: PriorityFilter,
    #[serde(default)]
    pub sort: SortOption,
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_use_emoji() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::default(),
            priority_filter: PriorityFilter::default(),
            sort: SortOption::default(),
            use_emoji: default_use_emoji(),
        }
    }
}

/// Load settings from settings.json
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
