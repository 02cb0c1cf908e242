//! Search query engine and task filters for TaskHive.
//!
//! This crate filters task collections locally, with no round-trips to the
//! store. It has two layers:
//!
//! - [`query`] - the search box language: a tokenizer/parser for boolean
//!   queries like `priority:high AND tag:design NOT status:completed` and an
//!   evaluator that applies them per task.
//! - [`filters`] - the non-query filters applied upstream: the view selector
//!   and the tag picker.
//!
//! [`search_tasks`] ties the two together the way the task browser does:
//! view filter, then tag filter, then search query, preserving input order.
//!
//! # Example
//!
//! ```
//! use taskhive_model_rs::prelude::*;
//! use taskhive_search_rs::search_tasks;
//!
//! let mut task = Task::new("1", "Polish landing page");
//! task.priority = Priority::High;
//! task.tags = vec!["Design".to_string()];
//!
//! let tasks = vec![task];
//! let results = search_tasks(&tasks, ViewFilter::All, None, "priority:high");
//! assert_eq!(results.len(), 1);
//! ```

pub mod filters;
pub mod query;

use taskhive_model_rs::task::{Task, ViewFilter};

use crate::query::{QueryEvaluator, QueryParser};

/// Filters a task collection the way the task browser does: view filter,
/// then tag filter, then search query.
///
/// All three stages are per-task predicates, so they are applied in a single
/// order-preserving pass. The query string is parsed once per call.
pub fn search_tasks<'a>(
    tasks: &'a [Task],
    view: ViewFilter,
    tag: Option<&str>,
    query: &str,
) -> Vec<&'a Task> {
    let parsed = QueryParser::parse(query);
    let evaluator = QueryEvaluator::new(&parsed);

    tasks
        .iter()
        .filter(|task| filters::matches_view(task, view))
        .filter(|task| tag.map_or(true, |tag| filters::matches_tag(task, tag)))
        .filter(|task| evaluator.matches(task))
        .collect()
}
