//! Core types: Task and TaskId

mod task;
mod task_id;

pub use task::{NO_DESCRIPTION, Task, UNTITLED_TASK};
pub use task_id::{ParseTaskIdError, TASK_FILE_EXTENSION, TaskId};
