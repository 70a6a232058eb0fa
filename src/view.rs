//! List presentation: search filtering, status ordering and empty states.
//!
//! These are pure functions of (tasks, query) so the list can be recomputed
//! on every render.

use crate::task::Task;

/// Tasks whose title contains `query`, ignoring case and surrounding whitespace.
///
/// A blank query keeps every task in its original order.
pub fn filter_by_query<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let query = query.trim();
    if query.is_empty() {
        return tasks.iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .collect()
}

/// Pending tasks before completed ones, each group keeping its input order.
pub fn order_by_status(mut tasks: Vec<&Task>) -> Vec<&Task> {
    // `sort_by_key` is stable.
    tasks.sort_by_key(|t| t.status.rank());
    tasks
}

/// The tasks the list shows for `query`.
pub fn visible_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    order_by_status(filter_by_query(tasks, query))
}

/// What the list says when there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search is active and matched nothing.
    NoMatches,
    /// There are no tasks at all.
    NoTasks,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoMatches => "No tasks match your search.",
            EmptyState::NoTasks => "No tasks yet.",
        }
    }
}

/// Pick the empty-state message, if any.
pub fn empty_state(total: usize, query: &str, visible: usize) -> Option<EmptyState> {
    if !query.trim().is_empty() && visible == 0 {
        Some(EmptyState::NoMatches)
    } else if total == 0 {
        Some(EmptyState::NoTasks)
    } else {
        None
    }
}

/// Print tasks as a plain-text table.
pub fn print_table(tasks: &[&Task]) {
    println!("{:<16} {:<10} {:<32} {}", "ID", "Status", "Title", "Description");
    for t in tasks {
        println!(
            "{:<16} {:<10} {:<32} {}",
            truncate(&t.id, 16),
            t.status,
            truncate(&t.title, 32),
            t.description
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::fields::TaskStatus::{Completed, Pending};
    use crate::seed::seed_tasks;
    use crate::task::test_support::task;

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_query_returns_everything_in_order(#[case] query: &str) {
        let tasks = seed_tasks();
        let filtered = filter_by_query(&tasks, query);
        assert_eq!(filtered.len(), tasks.len());
        assert!(filtered.iter().zip(&tasks).all(|(a, b)| *a == b));
    }

    #[test]
    fn query_matches_case_insensitively() {
        let tasks = vec![task("1", "Review weekly goals", Pending)];
        assert_eq!(ids(&filter_by_query(&tasks, "REVIEW")), vec!["1"]);
        assert_eq!(ids(&filter_by_query(&tasks, "  weekly ")), vec!["1"]);
        assert!(filter_by_query(&tasks, "monthly").is_empty());
    }

    #[test]
    fn query_only_searches_titles() {
        let tasks = seed_tasks();
        // "priorities" only appears in task-001's description.
        assert!(filter_by_query(&tasks, "priorities").is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let tasks = seed_tasks();
        assert_eq!(
            ids(&filter_by_query(&tasks, "e")),
            ids(&tasks.iter().filter(|t| t.title.to_lowercase().contains('e')).collect::<Vec<_>>())
        );
        assert_eq!(ids(&filter_by_query(&tasks, "notes")), vec!["task-004", "task-006"]);
    }

    #[test]
    fn order_is_a_stable_partition() {
        let tasks = vec![
            task("P1", "p1", Pending),
            task("C1", "c1", Completed),
            task("P2", "p2", Pending),
        ];
        assert_eq!(ids(&order_by_status(tasks.iter().collect())), vec!["P1", "P2", "C1"]);
    }

    #[test]
    fn seeded_view_lists_pending_first() {
        let tasks = seed_tasks();
        assert_eq!(
            ids(&visible_tasks(&tasks, "")),
            vec!["task-001", "task-003", "task-005", "task-002", "task-004", "task-006"]
        );
    }

    #[rstest]
    #[case::search_without_matches(6, "zzz", 0, Some(EmptyState::NoMatches))]
    #[case::search_on_empty_list(0, "zzz", 0, Some(EmptyState::NoMatches))]
    #[case::no_tasks(0, "", 0, Some(EmptyState::NoTasks))]
    #[case::blank_query_no_tasks(0, "  ", 0, Some(EmptyState::NoTasks))]
    #[case::search_with_matches(6, "review", 1, None)]
    #[case::plain_list(6, "", 6, None)]
    fn empty_state_selection(
        #[case] total: usize,
        #[case] query: &str,
        #[case] visible: usize,
        #[case] expected: Option<EmptyState>,
    ) {
        assert_eq!(empty_state(total, query, visible), expected);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is too long", 8), "this is…");
    }
}
