//! Task data model for the TaskHive REST store.
//!
//! This crate defines the task record shape served by the external task
//! store, along with the enums and helpers the rest of the workspace builds
//! on. All types are plain values: the store owns persistence and lifecycle,
//! consumers here only read.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use taskhive_model_rs::prelude::*;
//! ```

pub mod error;
pub mod prelude;
pub mod task;
