//! Flat-file task format: first line is the title, the rest is the description.

use crate::domain::{NO_DESCRIPTION, UNTITLED_TASK};

/// Where decoded task content is going to be shown.
///
/// The two contexts differ only in what an empty description becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeContext {
    /// List and detail pages: empty descriptions read "No description available".
    #[default]
    Display,
    /// The edit form: empty descriptions stay empty so the field is not pre-filled.
    EditForm,
}

impl DecodeContext {
    fn empty_description(self) -> &'static str {
        match self {
            DecodeContext::Display => NO_DESCRIPTION,
            DecodeContext::EditForm => "",
        }
    }
}

/// Title and description decoded from a task file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    pub title: String,
    pub description: String,
}

/// Decodes raw file contents.
///
/// The content is split on `\n`. An empty first line yields "Untitled Task";
/// the remaining lines are rejoined with `\n` and trimmed.
///
/// # Examples
///
/// ```
/// use taskdir::infra::{DecodeContext, decode};
///
/// let content = decode("Buy milk\n2%\n", DecodeContext::Display);
/// assert_eq!(content.title, "Buy milk");
/// assert_eq!(content.description, "2%");
///
/// let content = decode("Buy milk", DecodeContext::EditForm);
/// assert_eq!(content.description, "");
/// ```
pub fn decode(raw: &str, context: DecodeContext) -> TaskContent {
    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));

    let title = if first.is_empty() {
        UNTITLED_TASK.to_string()
    } else {
        first.to_string()
    };

    let description = match rest.trim() {
        "" => context.empty_description().to_string(),
        trimmed => trimmed.to_string(),
    };

    TaskContent { title, description }
}

/// Encodes a task as `title + "\n" + description`.
///
/// Nothing is escaped: a newline inside `title` moves the text after it into
/// the description the next time the file is decoded.
pub fn encode(title: &str, description: Option<&str>) -> String {
    format!("{}\n{}", title, description.unwrap_or(""))
}
