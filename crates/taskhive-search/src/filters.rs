//! View and tag filters applied ahead of the search query.
//!
//! These are the non-query filters of the task browser: the view selector
//! (today / upcoming / completed / all) and the tag picker. Both narrow the
//! collection before the search query runs.

use std::collections::HashMap;

use chrono::Local;
use taskhive_model_rs::task::{Status, Task, ViewFilter};

/// Returns true if the task belongs to the given view.
///
/// Date views compare the task's due date against the current local
/// calendar date; tasks without a parseable due date never match them.
pub fn matches_view(task: &Task, view: ViewFilter) -> bool {
    match view {
        ViewFilter::Today => task
            .due_date_naive()
            .is_some_and(|due| due == Local::now().date_naive()),
        ViewFilter::Upcoming => task
            .due_date_naive()
            .is_some_and(|due| due >= Local::now().date_naive()),
        ViewFilter::Completed => task.status == Status::Completed,
        ViewFilter::All => true,
    }
}

/// Filters tasks by view, preserving input order.
pub fn filter_by_view(tasks: &[Task], view: ViewFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| matches_view(task, view)).collect()
}

/// Returns true if the task carries the tag (case-insensitive).
pub fn matches_tag(task: &Task, tag: &str) -> bool {
    task.has_tag(tag)
}

/// Filters tasks by tag, preserving input order. `None` selects everything.
pub fn filter_by_tag<'a>(tasks: &'a [Task], tag: Option<&str>) -> Vec<&'a Task> {
    match tag {
        Some(tag) => tasks.iter().filter(|task| matches_tag(task, tag)).collect(),
        None => tasks.iter().collect(),
    }
}

/// Collects the distinct tags across a task collection, sorted.
///
/// Tags are deduplicated case-insensitively; the casing of the first
/// occurrence wins for display.
pub fn unique_tags(tasks: &[Task]) -> Vec<String> {
    let mut by_lower: HashMap<String, String> = HashMap::new();
    for task in tasks {
        for tag in &task.tags {
            by_lower
                .entry(tag.to_lowercase())
                .or_insert_with(|| tag.clone());
        }
    }

    let mut tags: Vec<String> = by_lower.into_values().collect();
    tags.sort();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use taskhive_model_rs::task::Priority;

    // ==================== Test Helpers ====================

    fn make_task(id: &str, title: &str) -> Task {
        Task::new(id, title)
    }

    fn today_str() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    fn tomorrow_str() -> String {
        (Local::now() + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn yesterday_str() -> String {
        (Local::now() - Duration::days(1))
            .format("%Y-%m-%d")
            .to_string()
    }

    // ==================== View Filter Tests ====================

    #[test]
    fn test_view_today_matches_today_only() {
        let mut due_today = make_task("1", "Today");
        due_today.due_date = Some(today_str());

        let mut due_tomorrow = make_task("2", "Tomorrow");
        due_tomorrow.due_date = Some(tomorrow_str());

        let undated = make_task("3", "Undated");

        assert!(matches_view(&due_today, ViewFilter::Today));
        assert!(!matches_view(&due_tomorrow, ViewFilter::Today));
        assert!(!matches_view(&undated, ViewFilter::Today));
    }

    #[test]
    fn test_view_today_matches_datetime_due() {
        let mut task = make_task("1", "Today with time");
        task.due_date = Some(format!("{}T15:30", today_str()));
        assert!(matches_view(&task, ViewFilter::Today));
    }

    #[test]
    fn test_view_upcoming_includes_today_and_future() {
        let mut due_today = make_task("1", "Today");
        due_today.due_date = Some(today_str());

        let mut due_tomorrow = make_task("2", "Tomorrow");
        due_tomorrow.due_date = Some(tomorrow_str());

        let mut overdue = make_task("3", "Yesterday");
        overdue.due_date = Some(yesterday_str());

        let undated = make_task("4", "Undated");

        assert!(matches_view(&due_today, ViewFilter::Upcoming));
        assert!(matches_view(&due_tomorrow, ViewFilter::Upcoming));
        assert!(!matches_view(&overdue, ViewFilter::Upcoming));
        assert!(!matches_view(&undated, ViewFilter::Upcoming));
    }

    #[test]
    fn test_view_completed_ignores_dates() {
        let mut done = make_task("1", "Done");
        done.status = Status::Completed;

        let mut pending = make_task("2", "Pending");
        pending.due_date = Some(today_str());

        assert!(matches_view(&done, ViewFilter::Completed));
        assert!(!matches_view(&pending, ViewFilter::Completed));
    }

    #[test]
    fn test_view_all_matches_everything() {
        let task = make_task("1", "Anything");
        assert!(matches_view(&task, ViewFilter::All));
    }

    #[test]
    fn test_view_unparseable_due_date_never_matches_date_views() {
        let mut task = make_task("1", "Odd date");
        task.due_date = Some("someday".to_string());

        assert!(!matches_view(&task, ViewFilter::Today));
        assert!(!matches_view(&task, ViewFilter::Upcoming));
        assert!(matches_view(&task, ViewFilter::All));
    }

    #[test]
    fn test_filter_by_view_preserves_order() {
        let mut first = make_task("1", "First");
        first.due_date = Some(today_str());
        let second = make_task("2", "Undated");
        let mut third = make_task("3", "Third");
        third.due_date = Some(today_str());

        let tasks = vec![first, second, third];
        let results = filter_by_view(&tasks, ViewFilter::Today);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].task_id, "1");
        assert_eq!(results[1].task_id, "3");
    }

    // ==================== Tag Filter Tests ====================

    #[test]
    fn test_filter_by_tag_case_insensitive() {
        let mut design = make_task("1", "Mockups");
        design.tags = vec!["Design".to_string()];

        let mut backend = make_task("2", "API");
        backend.tags = vec!["Backend".to_string()];

        let tasks = vec![design, backend];

        let results = filter_by_tag(&tasks, Some("design"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].task_id, "1");
    }

    #[test]
    fn test_filter_by_tag_none_selects_all() {
        let tasks = vec![make_task("1", "A"), make_task("2", "B")];
        assert_eq!(filter_by_tag(&tasks, None).len(), 2);
    }

    #[test]
    fn test_filter_by_tag_no_match() {
        let mut task = make_task("1", "A");
        task.priority = Priority::High;
        let tasks = vec![task];
        assert!(filter_by_tag(&tasks, Some("missing")).is_empty());
    }

    // ==================== Unique Tag Tests ====================

    #[test]
    fn test_unique_tags_dedup_and_sort() {
        let mut a = make_task("1", "A");
        a.tags = vec!["Design".to_string()];
        let mut b = make_task("2", "B");
        b.tags = vec!["design".to_string(), "Urgent".to_string()];

        let tags = unique_tags(&[a, b]);
        assert_eq!(tags, vec!["Design".to_string(), "Urgent".to_string()]);
    }

    #[test]
    fn test_unique_tags_first_casing_wins() {
        let mut a = make_task("1", "A");
        a.tags = vec!["urgent".to_string()];
        let mut b = make_task("2", "B");
        b.tags = vec!["URGENT".to_string()];

        let tags = unique_tags(&[a, b]);
        assert_eq!(tags, vec!["urgent".to_string()]);
    }

    #[test]
    fn test_unique_tags_empty() {
        assert!(unique_tags(&[]).is_empty());
        assert!(unique_tags(&[make_task("1", "No tags")]).is_empty());
    }
}
