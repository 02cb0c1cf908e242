//! Task model for the TaskHive REST store.
//!
//! This module defines the Task struct and related types that represent
//! tasks as the store serves them (camelCase JSON).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Priority level of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Low priority.
    Low,
    /// Normal priority (the default for new tasks).
    #[default]
    Normal,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical string form as the store serializes it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    /// Parses a priority value case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(ModelError::unknown_priority(s)),
        }
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Not started yet (the default for new tasks).
    #[default]
    Pending,
    /// Actively being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished.
    Completed,
}

impl Status {
    /// Returns the canonical string form as the store serializes it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    /// Parses a status value case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ModelError::unknown_status(s)),
        }
    }
}

/// The list view selected in the task browser.
///
/// View filters narrow the task collection before any tag filter or search
/// query is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFilter {
    /// Tasks due on the current local date.
    Today,
    /// Tasks due today or later.
    Upcoming,
    /// Tasks with status Completed.
    Completed,
    /// All tasks.
    #[default]
    All,
}

impl FromStr for ViewFilter {
    type Err = ModelError;

    /// Parses a view filter name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(ViewFilter::Today),
            "upcoming" => Ok(ViewFilter::Upcoming),
            "completed" => Ok(ViewFilter::Completed),
            "all" => Ok(ViewFilter::All),
            _ => Err(ModelError::unknown_view_filter(s)),
        }
    }
}

/// A task in TaskHive.
///
/// Tasks are the core entity, created and updated through the REST store and
/// consumed read-only by the search and filter layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The unique identifier assigned by the store.
    pub task_id: String,

    /// The short title of the task.
    pub title: String,

    /// A longer free-form description.
    #[serde(default)]
    pub description: String,

    /// The due date in ISO 8601 form (date-only or datetime), if scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// The task's priority level.
    #[serde(default)]
    pub priority: Priority,

    /// The task's completion status.
    #[serde(default)]
    pub status: Status,

    /// Tags attached to the task. Tag identity is case-insensitive, but the
    /// casing the user typed is preserved for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// When the store created the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the store last updated the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with the given id and title and default everything else.
    pub fn new(task_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
            status: Status::default(),
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns true if the task has a due date set.
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Returns the due date as a NaiveDate if set and parseable.
    ///
    /// The store writes due dates in a handful of ISO 8601 shapes (full
    /// RFC 3339, naive datetime with or without seconds, date only); all of
    /// them are accepted here.
    pub fn due_date_naive(&self) -> Option<NaiveDate> {
        let raw = self.due_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .map(|dt| dt.date())
                    .ok()
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
                    .map(|dt| dt.date())
                    .ok()
            })
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// Returns true if the task carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag_lower = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }

    /// Returns true if the task is completed.
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Returns true if this is a high priority task.
    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}
