//! Timestamp-and-slug task identifier.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::infra::sanitize_title;

/// Extension given to every task file in the storage directory.
pub const TASK_FILE_EXTENSION: &str = "txt";

/// Identifier of a task, equal to its filename without the `.txt` extension.
///
/// Generated ids have the form `<unix-millis>_<sanitized-title>`, so a plain
/// lexicographic listing of the storage directory is roughly chronological.
/// Ids arriving from a URL are accepted verbatim as long as they name a file
/// directly inside the storage directory.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use taskdir::domain::TaskId;
///
/// let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
/// let id = TaskId::generate("Buy milk", at);
/// assert_eq!(id.as_str(), "1700000000000_buy_milk");
/// assert_eq!(id.filename(), "1700000000000_buy_milk.txt");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Creates the id for a task titled `title` created at `at`.
    pub fn generate(title: &str, at: DateTime<Utc>) -> Self {
        Self(format!("{}_{}", at.timestamp_millis(), sanitize_title(title)))
    }

    /// Creates the id for a task titled `title` created now.
    pub fn generate_now(title: &str) -> Self {
        Self::generate(title, Utc::now())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the task's filename (`<id>.txt`).
    pub fn filename(&self) -> String {
        format!("{}.{}", self.0, TASK_FILE_EXTENSION)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId(\"{}\")", self.0)
    }
}

/// Error returned when a string cannot name a task file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaskIdError {
    value: String,
}

impl ParseTaskIdError {
    /// Returns the rejected value.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTaskIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task id '{}'", self.value)
    }
}

impl std::error::Error for ParseTaskIdError {}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Accepts any id that stays inside the storage directory.
    ///
    /// Empty ids, `.`/`..`, and anything containing a path separator or NUL
    /// are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let escapes_dir = s.is_empty()
            || s == "."
            || s == ".."
            || s.contains(['/', '\\', '\0']);
        if escapes_dir {
            return Err(ParseTaskIdError {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
