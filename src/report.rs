use crate::domain::{compute_stats, sort_tasks, Priority, SortOption, Task};
use chrono::{DateTime, Local};

/// How many recently completed tasks the report lists
const RECENT_HARVEST_LIMIT: usize = 10;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a markdown summary of the garden as of `now`
pub fn generate_report(tasks: &[Task], now: DateTime<Local>) -> String {
    let stats = compute_stats(tasks);
    let mut report = String::new();

    report.push_str(&format!("# Garden Report - {}\n\n", now.format("%Y-%m-%d %H:%M")));

    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Total Tasks:** {} (Growing: {}, Harvested: {})\n",
        stats.total, stats.active, stats.completed
    ));
    report.push_str(&format!("- **Progress:** {}\n\n", format_percent(stats.progress)));

    report.push_str("## By Priority\n\n");
    report.push_str("| Priority | Tasks |\n");
    report.push_str("|----------|-------|\n");
    for priority in Priority::all() {
        report.push_str(&format!(
            "| {} | {} |\n",
            priority.label(),
            stats.by_priority.get(*priority)
        ));
    }
    report.push('\n');

    let growing: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
    report.push_str("## Still Growing\n\n");
    if growing.is_empty() {
        report.push_str("_Nothing left to tend._\n\n");
    } else {
        for task in sort_tasks(&growing, SortOption::Priority) {
            report.push_str(&format!("- [{}] {}\n", task.priority.label(), task.title));
        }
        report.push('\n');
    }

    let mut harvested: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
    harvested.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    report.push_str("## Recently Harvested\n\n");
    if harvested.is_empty() {
        report.push_str("_No harvest yet._\n");
    } else {
        for task in harvested.into_iter().take(RECENT_HARVEST_LIMIT) {
            let when = task
                .completed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            report.push_str(&format!("- ✓ {} ({})\n", task.title, when));
        }
    }

    report
}
