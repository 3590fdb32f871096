use super::enums::{Priority, PriorityFilter, SortOption, StatusFilter};
use super::task::Task;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filter and sort parameters for the derived view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub search: String,
    pub sort: SortOption,
}

/// Task counts per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::Critical => self.critical += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

/// Aggregate statistics over the whole collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Completion percentage in `0.0..=100.0`
    pub progress: f64,
    pub by_priority: PriorityCounts,
}

/// Narrow tasks by status, priority and search query (all ANDed)
pub fn filter_tasks(
    tasks: &[Task],
    status: StatusFilter,
    priority: PriorityFilter,
    query: &str,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| status.matches(t.completed))
        .filter(|t| priority.matches(t.priority))
        .filter(|t| t.matches_query(query))
        .cloned()
        .collect()
}

/// Return a sorted copy. The sort is stable, so ties keep their input order.
pub fn sort_tasks(tasks: &[Task], sort: SortOption) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match sort {
        SortOption::Date => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Priority => sorted.sort_by_key(|t| t.priority.rank()),
        SortOption::Alphabetical => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}

/// Alphabetical collation in the manner of a root-locale collator.
///
/// Levels, compared in turn: base letters (accents and case folded away),
/// then accents, then case with lowercase first. Raw text breaks any
/// remaining tie.
fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a_base, b_base) = (base_letters(a), base_letters(b));
    a_base
        .cmp(&b_base)
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| case_pattern(a).cmp(&case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased text with combining marks stripped ("Éclair" -> "eclair")
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased decomposed text, keeping accents
fn accented_letters(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

/// Uppercase flags per letter; `false` sorts first, so lowercase wins ties
fn case_pattern(text: &str) -> Vec<bool> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .map(char::is_uppercase)
        .collect()
}

/// Filter, then sort
pub fn derive_view(tasks: &[Task], params: &ViewParams) -> Vec<Task> {
    let filtered = filter_tasks(tasks, params.status, params.priority, &params.search);
    sort_tasks(&filtered, params.sort)
}

/// Compute totals, completion percentage and per-priority counts
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let mut by_priority = PriorityCounts::default();
    let mut completed = 0;

    for task in tasks {
        by_priority.bump(task.priority);
        if task.completed {
            completed += 1;
        }
    }

    let total = tasks.len();
    let progress = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    TaskStats {
        total,
        completed,
        active: total - completed,
        progress,
        by_priority,
    }
}

/// Glyph shown next to a task for its priority
pub fn priority_glyph(priority: Priority, use_emoji: bool) -> &'static str {
    if use_emoji {
        match priority {
            Priority::Critical => "🌺",
            Priority::High => "🌲",
            Priority::Medium => "🌻",
            Priority::Low => "🌱",
        }
    } else {
        match priority {
            Priority::Critical => "!!",
            Priority::High => "! ",
            Priority::Medium => "- ",
            Priority::Low => ". ",
        }
    }
}

/// Checkbox badge for a task's completion state
pub fn completion_badge(completed: bool) -> &'static str {
    if completed {
        "[✓]"
    } else {
        "[ ]"
    }
}

/// Growth message for the progress header
pub fn progress_phrase(stats: &TaskStats) -> &'static str {
    if stats.total == 0 {
        "Plant your first seed (n)"
    } else if stats.progress >= 100.0 {
        "Full bloom, everything harvested"
    } else if stats.progress >= 75.0 {
        "Almost ready for harvest"
    } else if stats.progress >= 50.0 {
        "Halfway to harvest"
    } else if stats.progress >= 25.0 {
        "Sprouts are showing"
    } else {
        "Seeds in the soil"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn task(title: &str, priority: Priority) -> Task {
        Task::new(title, priority, None).unwrap()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn sample() -> Vec<Task> {
        let mut done = task("Harvest tomatoes", Priority::High);
        done.toggle();
        let mut with_desc = task("Buy soil", Priority::Critical);
        with_desc.description = Some("Peat-free compost".to_string());
        vec![
            with_desc,
            done,
            task("Water plants", Priority::Low),
            task("Prune roses", Priority::Critical),
        ]
    }

    #[test]
    fn test_filter_active_only() {
        let tasks = sample();
        let active = filter_tasks(&tasks, StatusFilter::Active, PriorityFilter::All, "");
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_filter_completed_only() {
        let tasks = sample();
        let done = filter_tasks(&tasks, StatusFilter::Completed, PriorityFilter::All, "");
        assert_eq!(titles(&done), vec!["Harvest tomatoes"]);
    }

    #[test]
    fn test_filter_exact_priority() {
        let tasks = sample();
        let critical = filter_tasks(
            &tasks,
            StatusFilter::All,
            PriorityFilter::Only(Priority::Critical),
            "",
        );
        assert_eq!(titles(&critical), vec!["Buy soil", "Prune roses"]);
    }

    #[test]
    fn test_filter_search_title_or_description() {
        let tasks = sample();
        let by_desc = filter_tasks(&tasks, StatusFilter::All, PriorityFilter::All, "COMPOST");
        assert_eq!(titles(&by_desc), vec!["Buy soil"]);

        let by_title = filter_tasks(&tasks, StatusFilter::All, PriorityFilter::All, "plants");
        assert_eq!(titles(&by_title), vec!["Water plants"]);
    }

    #[test]
    fn test_filter_predicates_are_anded() {
        let tasks = sample();
        let none = filter_tasks(
            &tasks,
            StatusFilter::Completed,
            PriorityFilter::Only(Priority::Critical),
            "",
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_sort_priority_is_stable() {
        let tasks = vec![
            task("A", Priority::Low),
            task("B", Priority::Critical),
            task("C", Priority::Low),
            task("D", Priority::Critical),
            task("E", Priority::Medium),
        ];
        let sorted = sort_tasks(&tasks, SortOption::Priority);
        assert_eq!(titles(&sorted), vec!["B", "D", "E", "A", "C"]);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].priority.rank() <= w[1].priority.rank()));
    }

    #[test]
    fn test_sort_date_newest_first() {
        let mut old = task("Old", Priority::Low);
        old.created_at = old.created_at - Duration::days(2);
        let mut older = task("Older", Priority::Low);
        older.created_at = older.created_at - Duration::days(5);
        let fresh = task("Fresh", Priority::Low);

        let sorted = sort_tasks(&[older, fresh, old], SortOption::Date);
        assert_eq!(titles(&sorted), vec!["Fresh", "Old", "Older"]);
    }

    #[test]
    fn test_sort_alphabetical_ignores_case() {
        let tasks = vec![
            task("banana", Priority::Low),
            task("Apple", Priority::Low),
            task("cherry", Priority::Low),
        ];
        let sorted = sort_tasks(&tasks, SortOption::Alphabetical);
        assert_eq!(titles(&sorted), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_alphabetical_folds_accents_and_case() {
        let tasks = vec![
            task("Zinnia", Priority::Low),
            task("Éclair", Priority::Low),
            task("apple", Priority::Low),
            task("Apple", Priority::Low),
        ];
        let sorted = sort_tasks(&tasks, SortOption::Alphabetical);
        assert_eq!(titles(&sorted), vec!["apple", "Apple", "Éclair", "Zinnia"]);
    }

    #[test]
    fn test_sort_alphabetical_unaccented_before_accented() {
        let tasks = vec![task("résumé", Priority::Low), task("resume", Priority::Low)];
        let sorted = sort_tasks(&tasks, SortOption::Alphabetical);
        assert_eq!(titles(&sorted), vec!["resume", "résumé"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let tasks = vec![task("B", Priority::Low), task("A", Priority::Low)];
        let _ = sort_tasks(&tasks, SortOption::Alphabetical);
        assert_eq!(titles(&tasks), vec!["B", "A"]);
    }

    #[test]
    fn test_scenario_priority_and_alphabetical() {
        // Newest first, as the store prepends
        let tasks = vec![task("B", Priority::Critical), task("A", Priority::Low)];
        assert_eq!(titles(&sort_tasks(&tasks, SortOption::Priority)), vec!["B", "A"]);
        assert_eq!(titles(&sort_tasks(&tasks, SortOption::Alphabetical)), vec!["A", "B"]);
    }

    #[test]
    fn test_derive_view_filters_then_sorts() {
        let tasks = sample();
        let params = ViewParams {
            status: StatusFilter::Active,
            sort: SortOption::Alphabetical,
            ..Default::default()
        };
        let view = derive_view(&tasks, &params);
        assert_eq!(titles(&view), vec!["Buy soil", "Prune roses", "Water plants"]);
    }

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, TaskStats::default());
        assert_eq!(stats.progress, 0.0);
    }

    #[test]
    fn test_stats_all_completed() {
        let mut tasks = vec![task("A", Priority::Low), task("B", Priority::High)];
        tasks.iter_mut().for_each(Task::toggle);
        let stats = compute_stats(&tasks);
        assert_eq!(stats.progress, 100.0);
        assert_eq!(stats.active, 0);
    }

    #[test]
    fn test_stats_counts() {
        let stats = compute_stats(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.progress, 25.0);
        assert_eq!(
            stats.by_priority,
            PriorityCounts {
                critical: 2,
                high: 1,
                medium: 0,
                low: 1,
            }
        );
    }

    #[test]
    fn test_priority_glyph_ascii() {
        assert_eq!(priority_glyph(Priority::Critical, false), "!!");
        assert_eq!(priority_glyph(Priority::Low, true), "🌱");
    }

    #[test]
    fn test_progress_phrase_bands() {
        assert_eq!(progress_phrase(&compute_stats(&[])), "Plant your first seed (n)");
        let stats = compute_stats(&sample());
        assert_eq!(progress_phrase(&stats), "Sprouts are showing");
    }
}
