//! Query evaluation against task records.
//!
//! This module provides the [`QueryEvaluator`] for applying a parsed search
//! query to tasks from the store.
//!
//! # Example
//!
//! ```
//! use taskhive_model_rs::prelude::*;
//! use taskhive_search_rs::query::{QueryEvaluator, QueryParser};
//!
//! let parsed = QueryParser::parse("priority:high");
//! let evaluator = QueryEvaluator::new(&parsed);
//!
//! let mut task = Task::new("1", "Prepare launch");
//! task.priority = Priority::High;
//!
//! assert!(evaluator.matches(&task));
//! ```

use taskhive_model_rs::task::Task;

use super::token::{Field, Operator, ParsedQuery, Token};

/// Evaluates a parsed query against tasks.
///
/// Evaluation is pure and per-task: the evaluator never mutates a task, and
/// the same query applied to the same task always yields the same decision.
/// An empty query matches every task, and no input can make evaluation fail;
/// degenerate token sequences bias toward inclusion.
#[derive(Debug)]
pub struct QueryEvaluator<'a> {
    query: &'a ParsedQuery,
}

impl<'a> QueryEvaluator<'a> {
    /// Creates a new evaluator borrowing the parsed query.
    pub fn new(query: &'a ParsedQuery) -> Self {
        Self { query }
    }

    /// Returns true if the task matches the query.
    pub fn matches(&self, task: &Task) -> bool {
        if self.query.tokens.is_empty() {
            return true;
        }

        if !self.query.has_advanced_syntax {
            return match &self.query.tokens[0] {
                Token::Text(text) => self.text_matches(task, text),
                _ => true,
            };
        }

        self.fold_tokens(task)
    }

    /// Filters a slice of tasks, returning only those that match, in input
    /// order.
    pub fn filter_tasks<'b>(&self, tasks: &'b [Task]) -> Vec<&'b Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    /// Folds the token sequence left to right into a single decision.
    ///
    /// There is no operator precedence and no grouping: each operand
    /// combines with the accumulator through the most recent connective,
    /// defaulting to AND when two operands arrive with none between them.
    fn fold_tokens(&self, task: &Task) -> bool {
        let mut state = FoldState::new();

        for token in &self.query.tokens {
            match token {
                Token::Operator(Operator::Not) => state.pending_not = true,
                Token::Operator(op) => state.connective = Some(*op),
                Token::Field {
                    field,
                    value,
                    negated,
                } => {
                    let matched = self.field_matches(task, *field, value);
                    // Negation from the token itself and from an absorbed
                    // NOT operator compose into a single inversion.
                    let invert = *negated || state.pending_not;
                    state.fold(matched != invert);
                }
                Token::Text(text) => {
                    let matched = self.text_matches(task, text);
                    let invert = state.pending_not;
                    state.fold(matched != invert);
                }
            }
        }

        state.result.unwrap_or(true)
    }

    /// Compares one task attribute against a filter value
    /// (case-insensitive; tags are a membership test).
    fn field_matches(&self, task: &Task, field: Field, value: &str) -> bool {
        let value_lower = value.to_lowercase();
        match field {
            Field::Priority => task.priority.as_str().to_lowercase() == value_lower,
            Field::Status => task.status.as_str().to_lowercase() == value_lower,
            Field::Tag => task.tags.iter().any(|t| t.to_lowercase() == value_lower),
        }
    }

    /// Returns true if the text occurs as a substring of the task's title,
    /// description, or any tag (case-insensitive).
    fn text_matches(&self, task: &Task, text: &str) -> bool {
        let needle = text.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
            || task.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Mutable state threaded through the fold.
struct FoldState {
    /// The accumulated decision; unset until the first operand folds.
    result: Option<bool>,
    /// The connective recorded since the last operand.
    connective: Option<Operator>,
    /// Whether a standalone NOT is waiting to invert the next operand.
    pending_not: bool,
}

impl FoldState {
    fn new() -> Self {
        Self {
            result: None,
            connective: None,
            pending_not: false,
        }
    }

    /// Folds one operand into the accumulator and resets the per-operand
    /// state.
    fn fold(&mut self, operand: bool) {
        self.result = Some(match (self.result, self.connective) {
            (None, _) => operand,
            (Some(acc), Some(Operator::Or)) => acc || operand,
            (Some(acc), _) => acc && operand,
        });
        self.connective = None;
        self.pending_not = false;
    }
}
