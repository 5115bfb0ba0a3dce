//! File I/O, task file format, filename sanitization

mod codec;
mod slug;
mod store;

pub use codec::{DecodeContext, TaskContent, decode, encode};
pub use slug::sanitize_title;
pub use store::{StoreError, TaskStore};
