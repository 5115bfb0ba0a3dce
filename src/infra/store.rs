//! Flat-file task repository: one `<id>.txt` per task in a single directory.
//!
//! Writes go straight to the target file. There is no locking and no
//! temp-file rename, so concurrent writers to the same id race and the last
//! one wins.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::domain::{TASK_FILE_EXTENSION, Task, TaskId};
use crate::infra::codec::{DecodeContext, decode, encode};

/// Errors from task repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title is required")]
    TitleRequired,

    #[error("task not found: {id}")]
    NotFound {
        id: TaskId,
        #[source]
        source: io::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list task directory {path}: {source}")]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the title was missing or blank.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::TitleRequired)
    }

    /// Returns true if the task file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Task repository rooted at a storage directory.
#[derive(Debug, Clone)]
pub struct TaskStore {
    dir: PathBuf,
}

impl TaskStore {
    /// Creates a store for `dir` without touching the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store and makes sure its directory exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory is missing and cannot be
    /// created. Only the last path component is created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(dir);
        store.ensure_dir()?;
        Ok(store)
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the storage directory (single level) if it is not already a directory.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        info!(dir = %self.dir.display(), "created task directory");
        Ok(())
    }

    fn path_for(&self, id: &TaskId) -> PathBuf {
        self.dir.join(id.filename())
    }

    /// Lists every task, degrading to an empty list if the directory can't be read.
    ///
    /// Files that fail to read are skipped with a warning. Order is whatever
    /// the directory enumeration yields.
    pub fn list_all(&self) -> Vec<Task> {
        match self.try_list() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "listing tasks failed; showing none");
                Vec::new()
            }
        }
    }

    /// Lists every task, reporting a directory enumeration failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryList` if the storage directory itself
    /// cannot be enumerated. Unreadable entries are skipped, not reported.
    pub fn try_list(&self) -> Result<Vec<Task>, StoreError> {
        let mut tasks = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(StoreError::DirectoryList {
                        path: self.dir.clone(),
                        source: err,
                    });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };

            let path = entry.path();
            if path.extension().is_none_or(|e| e != TASK_FILE_EXTENSION) {
                continue;
            }

            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<TaskId>().ok())
            else {
                warn!(path = %path.display(), "skipping task file with unusable name");
                continue;
            };

            match read_task_file(path) {
                Ok(raw) => {
                    let content = decode(&raw, DecodeContext::Display);
                    tasks.push(Task::new(id, content.title, content.description));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable task file");
                }
            }
        }

        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Reads one task.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the file is absent or unreadable.
    pub fn read(&self, id: &TaskId, context: DecodeContext) -> Result<Task, StoreError> {
        let raw = read_task_file(&self.path_for(id)).map_err(|source| StoreError::NotFound {
            id: id.clone(),
            source,
        })?;
        let content = decode(&raw, context);
        Ok(Task::new(id.clone(), content.title, content.description))
    }

    /// Creates a task stamped with the current time and returns its id.
    ///
    /// An existing file with the same id is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TitleRequired` for a blank title and
    /// `StoreError::Io` if the file cannot be written.
    pub fn create(&self, title: &str, description: Option<&str>) -> Result<TaskId, StoreError> {
        require_title(title)?;
        self.write_new(TaskId::generate_now(title), title, description)
    }

    /// Like [`TaskStore::create`], with the id stamped with `at`.
    pub fn create_at(
        &self,
        title: &str,
        description: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<TaskId, StoreError> {
        require_title(title)?;
        self.write_new(TaskId::generate(title, at), title, description)
    }

    fn write_new(
        &self,
        id: TaskId,
        title: &str,
        description: Option<&str>,
    ) -> Result<TaskId, StoreError> {
        let path = self.path_for(&id);
        fs::write(&path, encode(title, description)).map_err(|e| StoreError::io(&path, e))?;
        Ok(id)
    }

    /// Overwrites an existing or new task file in place; the id never changes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TitleRequired` for a blank title and
    /// `StoreError::Io` if the file cannot be written.
    pub fn update(
        &self,
        id: &TaskId,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), StoreError> {
        require_title(title)?;
        let path = self.path_for(id);
        fs::write(&path, encode(title, description)).map_err(|e| StoreError::io(&path, e))
    }

    /// Removes a task file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no such file and
    /// `StoreError::Io` for any other removal failure.
    pub fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        fs::remove_file(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                id: id.clone(),
                source,
            },
            _ => StoreError::io(&path, source),
        })
    }
}

/// A title is blank if nothing remains after trimming whitespace and BOMs.
fn require_title(title: &str) -> Result<(), StoreError> {
    if title
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
    {
        return Err(StoreError::TitleRequired);
    }
    Ok(())
}

/// Reads a task file, replacing invalid UTF-8 rather than failing.
fn read_task_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
