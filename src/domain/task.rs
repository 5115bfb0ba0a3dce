//! Task struct: a short text to-do item backed by one file.

use serde::Serialize;

use crate::domain::TaskId;

/// Title shown for a task whose file has an empty first line.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Description shown in list and detail views for a task without one.
pub const NO_DESCRIPTION: &str = "No description available";

/// A single to-do item.
///
/// The task's on-disk form is `<id>.txt` in the storage directory, with the
/// title on the first line and the description on the remaining lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub filename: String,
}

impl Task {
    /// Creates a task, deriving `filename` from the id.
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        let filename = id.filename();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            filename,
        }
    }
}
