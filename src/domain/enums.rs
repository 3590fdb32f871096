use serde::{Deserialize, Serialize};

/// Task urgency, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank (critical = 0, low = 3)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Display name shown in the filter panel and forms
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Next priority, wrapping from low back to critical
    pub fn next(&self) -> Self {
        match self {
            Self::Critical => Self::High,
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::Critical,
        }
    }

    /// Previous priority, wrapping from critical to low
    pub fn prev(&self) -> Self {
        match self {
            Self::Critical => Self::Low,
            Self::High => Self::Critical,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

/// Completion-state filter for the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Growing",
            Self::Completed => "Harvested",
        }
    }

    pub fn all() -> &'static [StatusFilter] {
        &[Self::All, Self::Active, Self::Completed]
    }
}

/// Priority filter: everything, or one exact priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => *p == priority,
        }
    }
}

/// Ordering applied to the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Date,
    Priority,
    Alphabetical,
}

impl SortOption {
    pub fn next(&self) -> Self {
        match self {
            Self::Date => Self::Priority,
            Self::Priority => Self::Alphabetical,
            Self::Alphabetical => Self::Date,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Newest first",
            Self::Priority => "Priority",
            Self::Alphabetical => "A → Z",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Searching,
    AddingTask,
    EditingTask,
    Help,
}

impl UiMode {
    /// Whether keyboard focus sits inside a text-entry field in this mode
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Self::Searching | Self::AddingTask | Self::EditingTask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        let ranks: Vec<u8> = Priority::all().iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_priority_default_and_labels() {
        assert_eq!(Priority::default(), Priority::Medium);
        let labels: Vec<&str> = Priority::all().iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Critical", "High", "Medium", "Low"]);
    }

    #[test]
    fn test_priority_cycle_wraps() {
        assert_eq!(Priority::Low.next(), Priority::Critical);
        assert_eq!(Priority::Critical.prev(), Priority::Low);
        assert_eq!(Priority::Medium.next().prev(), Priority::Medium);
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Active.matches(false));
        assert!(!StatusFilter::Active.matches(true));
        assert!(StatusFilter::Completed.matches(true));
        assert!(!StatusFilter::Completed.matches(false));
    }

    #[test]
    fn test_priority_filter_matches() {
        assert!(PriorityFilter::All.matches(Priority::Low));
        assert!(PriorityFilter::Only(Priority::High).matches(Priority::High));
        assert!(!PriorityFilter::Only(Priority::High).matches(Priority::Low));
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn test_text_entry_modes() {
        assert!(UiMode::Searching.is_text_entry());
        assert!(UiMode::AddingTask.is_text_entry());
        assert!(UiMode::EditingTask.is_text_entry());
        assert!(!UiMode::Normal.is_text_entry());
        assert!(!UiMode::Help.is_text_entry());
    }
}
