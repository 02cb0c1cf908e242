//! Search query parser and evaluator for the task search box.
//!
//! A single search string mixes free text with a small boolean filter
//! language, and this module turns it into a filtered task collection in two
//! pure stages: [`QueryParser`] produces an ordered token sequence, and
//! [`QueryEvaluator`] applies it per task.
//!
//! # Supported Syntax
//!
//! ## Field Filters
//! - `priority:high` - match the task's priority (Low / Normal / High)
//! - `status:in progress` - match the task's status
//! - `tag:design` - membership in the task's tag set
//!
//! ## Boolean Keywords
//! - `AND` - both sides must match
//! - `OR` - either side may match
//! - `NOT` - inverts the term that follows it
//!
//! ## Free Text
//! Anything else is matched as a case-insensitive substring of the title,
//! description, and tags.
//!
//! Everything is case-insensitive. There is no grouping and no operator
//! precedence: terms fold strictly left to right. A query with none of the
//! structured syntax is one free-text term (plain substring search).
//!
//! # Example
//!
//! ```
//! use taskhive_model_rs::prelude::*;
//! use taskhive_search_rs::query::{QueryEvaluator, QueryParser};
//!
//! let parsed = QueryParser::parse("priority:high AND tag:design NOT status:completed");
//!
//! let mut task = Task::new("1", "Landing page");
//! task.priority = Priority::High;
//! task.tags = vec!["Design".to_string()];
//!
//! let evaluator = QueryEvaluator::new(&parsed);
//! assert!(evaluator.matches(&task));
//! ```

mod evaluator;
mod parser;
mod token;

pub use evaluator::QueryEvaluator;
pub use parser::QueryParser;
pub use token::{Field, Operator, ParsedQuery, Token};
