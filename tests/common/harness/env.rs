//! Isolated test environment with a temp task directory and in-process router.

// Allow dead code since not every test crate uses every helper
#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderName, Request, StatusCode, header};
use std::path::{Path, PathBuf};
use taskdir::infra::TaskStore;
use taskdir::web::{AppState, router};
use tempfile::TempDir;
use tower::ServiceExt;

use super::TaskdirCommand;

/// Status, redirect target, and body of a routed request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Returns the `Location` header, panicking if the response is not a redirect.
    pub fn redirect_target(&self) -> &str {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "expected a redirect");
        self.location.as_deref().expect("redirect without Location")
    }
}

/// Isolated test environment with a temporary task directory.
///
/// The task directory is `<tmp>/tasks`, created by `TaskStore::open`, and is
/// cleaned up when the environment is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the task directory
    tasks_dir: PathBuf,
    state: AppState,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let tasks_dir = temp_dir.path().join("tasks");
        let store = TaskStore::open(&tasks_dir).expect("Failed to open task store");
        let state = AppState::new(store).expect("Failed to compile templates");
        Self {
            _temp_dir: temp_dir,
            tasks_dir,
            state,
        }
    }

    /// Returns the path to the task directory.
    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }

    /// Returns the path to the temp root, outside the task directory.
    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Writes a raw task file `<id>.txt` and returns its path.
    pub fn write_task(&self, id: &str, content: &str) -> PathBuf {
        let path = self.tasks_dir.join(format!("{id}.txt"));
        std::fs::write(&path, content).expect("Failed to write task file");
        path
    }

    /// Reads a raw task file by id.
    pub fn read_task(&self, id: &str) -> String {
        std::fs::read_to_string(self.tasks_dir.join(format!("{id}.txt")))
            .expect("Failed to read task file")
    }

    /// Returns the sorted names of all `.txt` files in the task directory.
    pub fn task_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.tasks_dir)
            .expect("Failed to read task directory")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".txt"))
            .collect();
        names.sort();
        names
    }

    /// Returns the single task id in the directory.
    pub fn only_task_id(&self) -> String {
        let files = self.task_files();
        assert_eq!(files.len(), 1, "expected exactly one task file: {files:?}");
        files[0].trim_end_matches(".txt").to_string()
    }

    /// Sends a GET request through the router.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    /// Sends a form-encoded POST request through the router.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Sends a JSON POST request through the router.
    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Sends a POST request with no body and no content type.
    pub async fn post_empty(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = router(self.state.clone())
            .oneshot(request)
            .await
            .expect("response");

        let status = response.status();
        let location = header_value(response.headers(), header::LOCATION);
        let content_type = header_value(response.headers(), header::CONTENT_TYPE);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");

        TestResponse {
            status,
            location,
            content_type,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    /// Creates a TaskdirCommand pointed at this environment's task directory.
    ///
    /// The config path points at a file that does not exist so the user's
    /// own config is never read.
    pub fn cmd(&self) -> TaskdirCommand {
        TaskdirCommand::new()
            .dir(&self.tasks_dir)
            .config(&self.root().join("missing-config.toml"))
    }

    /// Writes a file next to the task directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| v.to_str().expect("ascii header").to_string())
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_task_directory() {
        let env = TestEnv::new();
        assert!(env.tasks_dir().is_dir());
        assert!(env.task_files().is_empty());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.tasks_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_write_and_read_task() {
        let env = TestEnv::new();
        env.write_task("1_a", "A\nbody");
        assert_eq!(env.read_task("1_a"), "A\nbody");
        assert_eq!(env.only_task_id(), "1_a");
    }
}
