//! Test harness for router and binary integration tests.
//!
//! Provides isolated task directories, an in-process router driven through
//! `tower::ServiceExt::oneshot`, and binary assertion helpers using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::TaskdirCommand;
#[allow(unused_imports)]
pub use env::{TestEnv, TestResponse};
