//! Prelude module for convenient imports.
//!
//! Re-exports the types consumers of the model crate almost always need.
//!
//! # Example
//!
//! ```
//! use taskhive_model_rs::prelude::*;
//!
//! let task = Task::new("t-1", "Buy milk");
//! assert_eq!(task.priority, Priority::Normal);
//! assert_eq!(task.status, Status::Pending);
//! ```

pub use crate::error::{ModelError, ModelResult};
pub use crate::task::{Priority, Status, Task, ViewFilter};
